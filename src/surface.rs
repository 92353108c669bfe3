/// Capability interface through which controllers mutate the page. The
/// browser build implements it over real elements; tests record the calls.
pub trait Surface {
    fn set_class(&mut self, target: &str, class: &str, on: bool);
    fn set_style(&mut self, target: &str, property: &str, value: &str);
    fn set_text(&mut self, target: &str, text: &str);
}

#[cfg(test)]
pub use recording::RecordingSurface;

#[cfg(test)]
mod recording {
    use std::collections::HashMap;

    use super::Surface;

    #[derive(Default)]
    pub struct RecordingSurface {
        classes: HashMap<(String, String), bool>,
        styles: HashMap<(String, String), String>,
        texts: HashMap<String, String>,
        pub writes: usize,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn class_on(&self, target: &str, class: &str) -> bool {
            self.classes
                .get(&(target.to_string(), class.to_string()))
                .copied()
                .unwrap_or(false)
        }

        pub fn targets_with_class(&self, class: &str) -> Vec<String> {
            let mut targets: Vec<String> = self
                .classes
                .iter()
                .filter(|((_, name), on)| name == class && **on)
                .map(|((target, _), _)| target.clone())
                .collect();
            targets.sort();
            targets
        }

        pub fn style_of(&self, target: &str, property: &str) -> Option<&str> {
            self.styles
                .get(&(target.to_string(), property.to_string()))
                .map(String::as_str)
        }

        pub fn text_of(&self, target: &str) -> Option<&str> {
            self.texts.get(target).map(String::as_str)
        }
    }

    impl Surface for RecordingSurface {
        fn set_class(&mut self, target: &str, class: &str, on: bool) {
            self.writes += 1;
            self.classes
                .insert((target.to_string(), class.to_string()), on);
        }

        fn set_style(&mut self, target: &str, property: &str, value: &str) {
            self.writes += 1;
            self.styles
                .insert((target.to_string(), property.to_string()), value.to_string());
        }

        fn set_text(&mut self, target: &str, text: &str) {
            self.writes += 1;
            self.texts.insert(target.to_string(), text.to_string());
        }
    }
}
