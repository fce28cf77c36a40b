/// The animatable properties of an element. Unset fields are left alone both when
/// tweening and when writing to the DOM.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub opacity: Option<f64>,
    /// Horizontal offset in px.
    pub x: Option<f64>,
    /// Vertical offset in px.
    pub y: Option<f64>,
    /// Horizontal offset as a percentage of the element's own width.
    pub x_percent: Option<f64>,
    pub scale: Option<f64>,
    /// Degrees.
    pub rotation: Option<f64>,
    /// Blur radius in px.
    pub blur: Option<f64>,
    /// Width as a percentage of the parent.
    pub width: Option<f64>,
}

macro_rules! setters {
    ($($field:ident),*) => {
        $(
            pub fn $field(mut self, value: f64) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(opacity, x, y, x_percent, scale, rotation, blur, width);

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Fields set on `other` replace the ones on `self`.
    pub fn overlay(&self, other: &Style) -> Style {
        Style {
            opacity: other.opacity.or(self.opacity),
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            x_percent: other.x_percent.or(self.x_percent),
            scale: other.scale.or(self.scale),
            rotation: other.rotation.or(self.rotation),
            blur: other.blur.or(self.blur),
            width: other.width.or(self.width),
        }
    }

    /// Keeps only the fields that `fields` sets.
    pub fn masked(&self, fields: &Style) -> Style {
        let keep = |value: Option<f64>, field: Option<f64>| field.and(value);
        Style {
            opacity: keep(self.opacity, fields.opacity),
            x: keep(self.x, fields.x),
            y: keep(self.y, fields.y),
            x_percent: keep(self.x_percent, fields.x_percent),
            scale: keep(self.scale, fields.scale),
            rotation: keep(self.rotation, fields.rotation),
            blur: keep(self.blur, fields.blur),
            width: keep(self.width, fields.width),
        }
    }

    /// Moves every field `to` sets from its current value (or the resting value when
    /// unset) towards the target by `progress`. Other fields are kept as they are.
    pub fn interpolate(&self, to: &Style, progress: f64) -> Style {
        let lerp = |from: Option<f64>, to: Option<f64>, rest: f64| match to {
            Some(b) => {
                let a = from.unwrap_or(rest);
                Some(a + (b - a) * progress)
            }
            None => from,
        };
        Style {
            opacity: lerp(self.opacity, to.opacity, 1.0),
            x: lerp(self.x, to.x, 0.0),
            y: lerp(self.y, to.y, 0.0),
            x_percent: lerp(self.x_percent, to.x_percent, 0.0),
            scale: lerp(self.scale, to.scale, 1.0),
            rotation: lerp(self.rotation, to.rotation, 0.0),
            blur: lerp(self.blur, to.blur, 0.0),
            width: lerp(self.width, to.width, 0.0),
        }
    }

    fn has_transform(&self) -> bool {
        self.x.is_some()
            || self.y.is_some()
            || self.x_percent.is_some()
            || self.scale.is_some()
            || self.rotation.is_some()
    }

    /// CSS declarations as `(property, value)` pairs.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::new();
        if let Some(opacity) = self.opacity {
            decls.push(("opacity", format!("{}", opacity.clamp(0.0, 1.0))));
        }
        if self.has_transform() {
            let mut transform = String::new();
            if let Some(xp) = self.x_percent {
                transform.push_str(&format!("translateX({xp}%) "));
            }
            transform.push_str(&format!(
                "translate3d({}px, {}px, 0px) rotate({}deg) scale({})",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0),
                self.rotation.unwrap_or(0.0),
                self.scale.unwrap_or(1.0),
            ));
            decls.push(("transform", transform));
        }
        if let Some(blur) = self.blur {
            decls.push(("filter", format!("blur({}px)", blur.max(0.0))));
        }
        if let Some(width) = self.width {
            decls.push(("width", format!("{width}%")));
        }
        decls
    }

    /// The declarations as an inline `style` attribute, for the first paint before any
    /// frame is written.
    pub fn inline(&self) -> String {
        self.css()
            .into_iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_uses_resting_values() {
        let from = Style::new();
        let to = Style::new().opacity(0.0).scale(2.0);
        let mid = from.interpolate(&to, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.scale, Some(1.5));
        assert_eq!(mid.x, None);
    }

    #[test]
    fn test_interpolate_keeps_untouched_fields() {
        let from = Style::new().opacity(0.0).y(30.0).blur(10.0);
        let to = Style::new().opacity(1.0);
        let end = from.interpolate(&to, 1.0);
        assert_eq!(end.opacity, Some(1.0));
        assert_eq!(end.y, Some(30.0));
        assert_eq!(end.blur, Some(10.0));
    }

    #[test]
    fn test_overlay() {
        let base = Style::new().opacity(0.5).x(10.0);
        let merged = base.overlay(&Style::new().x(-4.0).rotation(5.0));
        assert_eq!(merged, Style::new().opacity(0.5).x(-4.0).rotation(5.0));
    }

    #[test]
    fn test_masked_keeps_requested_fields() {
        let applied = Style::new().opacity(0.2).y(40.0).scale(0.9);
        let masked = applied.masked(&Style::new().scale(1.05).rotation(5.0));
        assert_eq!(masked, Style::new().scale(0.9));
        assert!(applied.masked(&Style::new().width(50.0)).is_empty());
    }

    #[test]
    fn test_css_output() {
        let style = Style::new().opacity(0.25).y(-20.0).scale(0.9).blur(2.0);
        let css = style.css();
        assert_eq!(css[0], ("opacity", "0.25".to_string()));
        assert_eq!(
            css[1],
            (
                "transform",
                "translate3d(0px, -20px, 0px) rotate(0deg) scale(0.9)".to_string()
            )
        );
        assert_eq!(css[2], ("filter", "blur(2px)".to_string()));

        let menu = Style::new().x_percent(100.0).css();
        assert_eq!(
            menu[0].1,
            "translateX(100%) translate3d(0px, 0px, 0px) rotate(0deg) scale(1)"
        );
        assert!(Style::new().css().is_empty());
    }

    #[test]
    fn test_inline_attribute() {
        assert_eq!(Style::new().width(0.0).inline(), "width: 0%");
        assert_eq!(
            Style::new().opacity(0.0).x(-30.0).inline(),
            "opacity: 0; transform: translate3d(-30px, 0px, 0px) rotate(0deg) scale(1)"
        );
        assert_eq!(Style::new().inline(), "");
    }

    #[test]
    fn test_overshoot_opacity_is_clamped() {
        let css = Style::new().opacity(1.08).css();
        assert_eq!(css[0].1, "1");
    }
}
