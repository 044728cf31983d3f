/// What the user sees for a single question: the model's reply and the pages
/// the context was pulled from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<String>,
}
