use crate::api::models::{NewEvent, NewPost};
use crate::forms::Form;
use crate::sync::RefreshToken;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchSnapshot { token: RefreshToken },
    CreatePost { payload: NewPost, draft: Form },
    CreateEvent { payload: NewEvent, draft: Form },
    MarkRead { id: String },
    Quit,
}
