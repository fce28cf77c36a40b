use chrono::{DateTime, Datelike, Utc};

pub const OWNER: &str = "Ammara Urooj";
pub const SHORT_NAME: &str = "Ammara";
pub const ROLE: &str = "Web Developer";
pub const TAGLINE: &str =
    "Crafting digital experiences with cutting-edge technology and creative innovation";
pub const PROFILE_IMAGE: &str = "/images/profile.png";
pub const SCENE_URL: &str = "https://my.spline.design/orb-oR4IqWpCeLZw6X5c1qEnlvJv/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Html5,
    Css3,
    JavaScript,
    React,
    Lightning,
    TypeScript,
    GitHub,
    LinkedIn,
    ArrowRight,
    ExternalLink,
    PaperPlane,
    Heart,
    Menu,
    Close,
}

impl Icon {
    /// Icon font class: devicon for brands, the site's own `extra-*` glyphs otherwise.
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Html5 => "devicon-html5-plain",
            Icon::Css3 => "devicon-css3-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::React => "devicon-react-original",
            Icon::TypeScript => "devicon-typescript-plain",
            Icon::GitHub => "devicon-github-plain",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::Lightning => "extra-lightning",
            Icon::ArrowRight => "extra-arrow-right",
            Icon::ExternalLink => "extra-external-link",
            Icon::PaperPlane => "extra-send",
            Icon::Heart => "extra-heart",
            Icon::Menu => "extra-menu",
            Icon::Close => "extra-close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        name: "GitHub",
        href: "https://github.com",
        icon: Icon::GitHub,
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::LinkedIn,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub icon: Icon,
    pub name: &'static str,
    pub color: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        icon: Icon::Html5,
        name: "HTML5",
        color: "#E34F26",
    },
    Skill {
        icon: Icon::Css3,
        name: "CSS3",
        color: "#1572B6",
    },
    Skill {
        icon: Icon::JavaScript,
        name: "JavaScript",
        color: "#F7DF1E",
    },
    Skill {
        icon: Icon::React,
        name: "React",
        color: "#61DAFB",
    },
    Skill {
        icon: Icon::Lightning,
        name: "GSAP",
        color: "#88CE02",
    },
    Skill {
        icon: Icon::TypeScript,
        name: "TypeScript",
        color: "#3178C6",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Currency Converter",
        subtitle: "Convert any currency instantly",
        image: "/images/project-1.jpg",
        description: "Real-time currency conversion with live exchange rates",
        tech: &["React", "API", "CSS3"],
        github: "#",
        live: "#",
    },
    Project {
        id: 2,
        title: "Appointment Booking App",
        subtitle: "Easy scheduling system",
        image: "/images/project-2.jpg",
        description: "Modern appointment booking system with calendar integration",
        tech: &["React", "Node.js", "MongoDB"],
        github: "#",
        live: "#",
    },
    Project {
        id: 3,
        title: "Drum Kit",
        subtitle: "Play beats with your keyboard",
        image: "/images/project-3.jpg",
        description: "Interactive drum kit with keyboard controls and sound effects",
        tech: &["JavaScript", "Web Audio API", "CSS3"],
        github: "#",
        live: "#",
    },
    Project {
        id: 4,
        title: "Process Scheduling Simulator",
        subtitle: "CPU Scheduling Algorithms",
        image: "/images/project-4.jpg",
        description: "Educational tool for understanding CPU scheduling algorithms",
        tech: &["JavaScript", "Data Structures", "Algorithms"],
        github: "#",
        live: "#",
    },
    Project {
        id: 5,
        title: "Phonebook (BST)",
        subtitle: "Tree-based contact manager",
        image: "/images/project-5.jpg",
        description: "Contact management system using Binary Search Tree",
        tech: &["JavaScript", "Data Structures", "Local Storage"],
        github: "#",
        live: "#",
    },
    Project {
        id: 6,
        title: "Portfolio Website",
        subtitle: "Showcasing my web development work",
        image: "/images/project-6.jpg",
        description: "Modern portfolio website with 3D animations and smooth scrolling",
        tech: &["React", "GSAP", "Spline"],
        github: "#",
        live: "#",
    },
];

/// Year the site was built, for the copyright line.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}
