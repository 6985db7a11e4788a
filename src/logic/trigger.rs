/// Characters whose self-insertion starts a capitalization pass.
pub const TRIGGER_CHARS: [char; 5] = [' ', ';', ',', '(', '\''];

/// The input event that produced the most recent edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Text inserted by typing it.
    SelfInsert(String),
    /// A key bound to some other command; Return arrives as `Key('\r')`.
    Key(char),
    Delete,
    Motion,
    /// Any other named command (yank, undo, ...).
    Command(String),
}

impl InputEvent {
    /// Return or line feed, typed or as a raw key.
    pub fn is_enter(&self) -> bool {
        match self {
            InputEvent::Key(c) => is_enter(*c),
            InputEvent::SelfInsert(text) => single_char(text).is_some_and(is_enter),
            _ => false,
        }
    }
}

impl From<char> for InputEvent {
    fn from(c: char) -> Self {
        InputEvent::SelfInsert(c.to_string())
    }
}

/// Whether `event` warrants a capitalization pass.
pub fn should_trigger(event: &InputEvent) -> bool {
    if event.is_enter() {
        return true;
    }
    match event {
        InputEvent::SelfInsert(text) => {
            single_char(text).is_some_and(|c| TRIGGER_CHARS.contains(&c))
        }
        _ => false,
    }
}

fn is_enter(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InputEvent::from(' '))]
    #[case(InputEvent::from(';'))]
    #[case(InputEvent::from(','))]
    #[case(InputEvent::from('('))]
    #[case(InputEvent::from('\''))]
    #[case(InputEvent::Key('\r'))]
    #[case(InputEvent::Key('\n'))]
    #[case(InputEvent::from('\n'))]
    fn triggers(#[case] event: InputEvent) {
        assert!(should_trigger(&event), "{event:?} should trigger");
    }

    #[rstest]
    #[case(InputEvent::from('a'))]
    #[case(InputEvent::from(')'))]
    #[case(InputEvent::from('.'))]
    #[case(InputEvent::SelfInsert(", ".into()))]
    #[case(InputEvent::SelfInsert(String::new()))]
    #[case(InputEvent::Key(' '))]
    #[case(InputEvent::Delete)]
    #[case(InputEvent::Motion)]
    #[case(InputEvent::Command("yank".into()))]
    fn does_not_trigger(#[case] event: InputEvent) {
        assert!(!should_trigger(&event), "{event:?} should not trigger");
    }
}
