use std::str::FromStr;

use super::ParseError;

/// A position along an axis: a fraction of a length, or a fixed pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Percent(f64),
    Px(f64),
}

impl Anchor {
    fn resolve(&self, length: f64) -> f64 {
        match *self {
            Anchor::Percent(p) => length * p / 100.0,
            Anchor::Px(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::TriggerPoint(s.to_string());
        match s {
            "top" => Ok(Anchor::Percent(0.0)),
            "center" => Ok(Anchor::Percent(50.0)),
            "bottom" => Ok(Anchor::Percent(100.0)),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    p.parse().map(Anchor::Percent).map_err(|_| err())
                } else if let Some(px) = s.strip_suffix("px") {
                    px.parse().map(Anchor::Px).map_err(|_| err())
                } else {
                    s.parse().map(Anchor::Px).map_err(|_| err())
                }
            }
        }
    }
}

/// `"<element anchor> <viewport anchor>"`, e.g. `"top 80%"`: fires when the element's
/// top edge crosses 80% of the way down the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPoint {
    fn reached(&self, rect: TriggerRect, viewport_height: f64) -> bool {
        let element_y = rect.top + self.element.resolve(rect.bottom - rect.top);
        element_y <= self.viewport.resolve(viewport_height)
    }
}

impl FromStr for TriggerPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(TriggerPoint {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(ParseError::TriggerPoint(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            _ => return Err(ParseError::ToggleActions(s.to_string())),
        })
    }
}

/// What to do on enter, leave, enter-back and leave-back, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        match actions[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(ToggleActions {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(ParseError::ToggleActions(s.to_string())),
        }
    }
}

/// An element's vertical extent relative to the viewport, as `getBoundingClientRect`
/// reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Zone {
    #[default]
    Before,
    Active,
    After,
}

/// Fires toggle actions as a trigger element scrolls through the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerPoint,
    end: TriggerPoint,
    actions: ToggleActions,
    zone: Zone,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPoint, end: TriggerPoint, actions: ToggleActions) -> Self {
        Self {
            start,
            end,
            actions,
            zone: Zone::Before,
        }
    }

    /// Builds a trigger from its string form. `end` defaults to `"bottom top"`.
    pub fn parse(start: &str, end: Option<&str>, actions: &str) -> Result<Self, ParseError> {
        Ok(Self::new(
            start.parse()?,
            end.unwrap_or("bottom top").parse()?,
            actions.parse()?,
        ))
    }

    pub fn is_active(&self) -> bool {
        self.zone == Zone::Active
    }

    /// Feeds the trigger element's current position. Returns the actions fired by the
    /// move, in order; a jump straight across the active zone fires both callbacks.
    pub fn update(&mut self, rect: TriggerRect, viewport_height: f64) -> Vec<ToggleAction> {
        let zone = if self.end.reached(rect, viewport_height) {
            Zone::After
        } else if self.start.reached(rect, viewport_height) {
            Zone::Active
        } else {
            Zone::Before
        };
        let a = self.actions;
        let fired = match (self.zone, zone) {
            (Zone::Before, Zone::Active) => vec![a.on_enter],
            (Zone::Active, Zone::After) => vec![a.on_leave],
            (Zone::After, Zone::Active) => vec![a.on_enter_back],
            (Zone::Active, Zone::Before) => vec![a.on_leave_back],
            (Zone::Before, Zone::After) => vec![a.on_enter, a.on_leave],
            (Zone::After, Zone::Before) => vec![a.on_enter_back, a.on_leave_back],
            _ => Vec::new(),
        };
        self.zone = zone;
        fired
            .into_iter()
            .filter(|action| *action != ToggleAction::None)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    fn rect(top: f64) -> TriggerRect {
        TriggerRect {
            top,
            bottom: top + 800.0,
        }
    }

    fn section_trigger() -> ScrollTrigger {
        ScrollTrigger::parse("top 80%", Some("bottom 20%"), "play none none reverse")
            .expect("trigger should parse")
    }

    #[test]
    fn test_parse_trigger_point() {
        assert_eq!(
            "top 80%".parse(),
            Ok(TriggerPoint {
                element: Anchor::Percent(0.0),
                viewport: Anchor::Percent(80.0),
            })
        );
        assert_eq!(
            "center 100px".parse(),
            Ok(TriggerPoint {
                element: Anchor::Percent(50.0),
                viewport: Anchor::Px(100.0),
            })
        );
        assert!("top".parse::<TriggerPoint>().is_err());
        assert!("top 80% extra".parse::<TriggerPoint>().is_err());
        assert!("middle 80%".parse::<TriggerPoint>().is_err());
    }

    #[test]
    fn test_parse_toggle_actions() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(actions.on_enter, ToggleAction::Play);
        assert_eq!(actions.on_leave_back, ToggleAction::Reverse);
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none rewind".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn test_enter_and_leave_back() {
        let mut trigger = section_trigger();
        // below the fold
        assert!(trigger.update(rect(1200.0), VIEWPORT).is_empty());
        // top edge crosses 80% of the viewport
        assert_eq!(trigger.update(rect(790.0), VIEWPORT), vec![ToggleAction::Play]);
        assert!(trigger.is_active());
        // still inside, nothing new
        assert!(trigger.update(rect(500.0), VIEWPORT).is_empty());
        // scrolled back up past the start
        assert_eq!(
            trigger.update(rect(900.0), VIEWPORT),
            vec![ToggleAction::Reverse]
        );
    }

    #[test]
    fn test_leave_fires_none_so_nothing_returned() {
        let mut trigger = section_trigger();
        trigger.update(rect(700.0), VIEWPORT);
        // bottom edge (top + 800) crosses 20%: top <= -600
        assert!(trigger.update(rect(-650.0), VIEWPORT).is_empty());
        assert!(!trigger.is_active());
        // and coming back in fires enter-back, which is also none
        assert!(trigger.update(rect(-100.0), VIEWPORT).is_empty());
        assert!(trigger.is_active());
    }

    #[test]
    fn test_jump_across_fires_both() {
        let mut trigger =
            ScrollTrigger::parse("top 80%", None, "play pause resume reset").unwrap();
        assert_eq!(
            trigger.update(rect(-5000.0), VIEWPORT),
            vec![ToggleAction::Play, ToggleAction::Pause]
        );
        assert_eq!(
            trigger.update(rect(5000.0), VIEWPORT),
            vec![ToggleAction::Resume, ToggleAction::Reset]
        );
    }

    #[test]
    fn test_already_visible_on_first_update() {
        let mut trigger = section_trigger();
        assert_eq!(trigger.update(rect(100.0), VIEWPORT), vec![ToggleAction::Play]);
    }
}
