// AI assessment: a supplementary free-text read on a post from a chat model.
//
// The provider sits behind the AssessmentProvider trait; the prompt and
// the tolerant response parser are provider-independent.

pub mod grok;
pub mod prompt;
pub mod traits;
