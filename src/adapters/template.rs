use tera::{Context, Tera};

use crate::domain::model::LetterContext;
use crate::domain::ports::LetterRenderer;
use crate::utils::error::Result;

const LETTER_TEMPLATE: &str = "form_letter";

/// Renders thank-you letters from a single Tera template.
pub struct TeraLetterRenderer {
    tera: Tera,
}

impl TeraLetterRenderer {
    /// Compiles `template` once; syntax errors surface here, before any row is read.
    pub fn new(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        // letters carry the fallback URL verbatim
        tera.autoescape_on(vec![]);
        tera.add_raw_template(LETTER_TEMPLATE, template)?;

        Ok(Self { tera })
    }
}

impl LetterRenderer for TeraLetterRenderer {
    fn render(&self, context: &LetterContext<'_>) -> Result<String> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(LETTER_TEMPLATE, &context)?)
    }
}
