use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

/// Shows the pending notification, if any, on the right side.
pub(crate) struct MyPrompt {
    pub(crate) notice: String,
}

impl Prompt for MyPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        "phonebook$ ".into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed(&self.notice)
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
