use super::{TAP_BEARING, TAP_CAPTION};
use crate::dial::Dial;

/// Where the spoken form of the bearing goes, e.g. a widget's accessible
/// description.
pub trait DescriptionSink: 'static {
    fn is_shown(&self) -> bool;
    fn set_description(&self, text: &str);
}

/// Writes the current description, if the sink is on screen.
pub fn sync_description(dial: &Dial, sink: &impl DescriptionSink) {
    if let Some(text) = dial.describe_for_accessibility(sink.is_shown()) {
        sink.set_description(&text);
    }
}

/// What the window shows: the dial and the caption beneath it.
pub struct HostState {
    pub dial: Dial,
    pub caption: String,
}

impl HostState {
    pub fn new(dial: Dial) -> Self {
        Self {
            dial,
            caption: String::new(),
        }
    }

    /// Clicking the dial jumps to a fixed test heading.
    pub fn tap(&mut self) {
        self.dial.set_bearing(TAP_BEARING);
        self.caption = TAP_CAPTION.to_string();
    }

    /// Writes the description now and again after every bearing change.
    pub fn attach_description(&mut self, sink: impl DescriptionSink) {
        sync_description(&self.dial, &sink);
        self.dial
            .connect_content_changed(move |dial| sync_description(dial, &sink));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dial::scene::FixedAdvance;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Announcer {
        shown: Rc<Cell<bool>>,
        said: Rc<RefCell<Vec<String>>>,
    }

    impl DescriptionSink for Announcer {
        fn is_shown(&self) -> bool {
            self.shown.get()
        }

        fn set_description(&self, text: &str) {
            self.said.borrow_mut().push(text.to_string());
        }
    }

    fn state() -> HostState {
        HostState::new(Dial::new(
            Config::default().resources(),
            &FixedAdvance::default(),
        ))
    }

    #[test]
    fn test_tap_sets_bearing_and_caption() {
        let dial = Dial::new(Config::default().resources(), &FixedAdvance::default());
        let mut state = HostState::new(dial);
        state.dial.set_bearing(-12.0);
        assert!(state.caption.is_empty());

        state.tap();

        assert_eq!(state.dial.bearing(), 45.0);
        assert_eq!(state.caption, "123456789-10-11");
    }

    #[test]
    fn test_tap_fires_accessibility_hook() {
        let mut dial = Dial::new(Config::default().resources(), &FixedAdvance::default());
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        dial.connect_content_changed(move |_| counter.set(counter.get() + 1));

        let mut state = HostState::new(dial);
        state.tap();
        state.tap();

        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_attach_describes_initial_bearing() {
        let mut state = state();
        state.dial.set_bearing(90.0);

        let announcer = Announcer::default();
        announcer.shown.set(true);
        state.attach_description(announcer.clone());
        assert_eq!(*announcer.said.borrow(), vec!["90.0"]);

        state.tap();
        assert_eq!(*announcer.said.borrow(), vec!["90.0", "45.0"]);
    }

    #[test]
    fn test_hidden_changes_catch_up_when_shown() {
        let mut state = state();
        let announcer = Announcer::default();
        state.attach_description(announcer.clone());

        state.tap();
        assert!(announcer.said.borrow().is_empty());

        // what the window does when the area gets mapped
        announcer.shown.set(true);
        sync_description(&state.dial, &announcer);
        assert_eq!(*announcer.said.borrow(), vec!["45.0"]);
    }
}
