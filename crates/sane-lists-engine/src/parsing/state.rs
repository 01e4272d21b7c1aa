/// A named parser state pushed by a processor for the duration of a
/// recursive parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Inside tight list item content: bare text stays inline.
    List,
    /// Inside the first item merged into a sibling list: bare text becomes `p`.
    LooseList,
    /// The current block was already dedented by the indent processor.
    Detabbed,
}

impl State {
    pub fn name(self) -> &'static str {
        match self {
            State::List => "list",
            State::LooseList => "looselist",
            State::Detabbed => "detabbed",
        }
    }
}

/// Stack of active [`State`]s.
///
/// Only the most recently pushed state is considered set, so a `Detabbed`
/// pushed inside a `List` masks the list until it is reset.
///
/// Every recursive parse pushes a state, so the stack depth doubles as the
/// recursion depth. Once it reaches [`ParserState::MAX_DEPTH`] the list and
/// indent processors decline further blocks and they are kept as text.
#[derive(Debug, Default, Clone)]
pub struct ParserState(Vec<State>);

impl ParserState {
    /// Two entries per nested list level (`list` then `detabbed`).
    pub const MAX_DEPTH: usize = 256;

    pub fn set(&mut self, state: State) {
        log::trace!("state set: {}", state.name());
        self.0.push(state);
    }

    pub fn reset(&mut self) -> Option<State> {
        let popped = self.0.pop();
        if let Some(state) = popped {
            log::trace!("state reset: {}", state.name());
        }
        popped
    }

    pub fn is_set(&self, state: State) -> bool {
        self.0.last() == Some(&state)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether nesting has reached [`ParserState::MAX_DEPTH`].
    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::MAX_DEPTH
    }
}
