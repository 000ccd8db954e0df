/// Glyph phrases printed by the bundled guessing game, in substitution order.
pub const DEFAULT_PHRASES: &[(&str, &str)] = &[
    ("🔢❓", "Guess the number:"),
    ("➡️", "to"),
    ("🔢➡️", "Enter your guess:\n"),
    ("✅🎉", "Correct! You guessed it."),
    ("📈❌", "Too high!"),
    ("📉❌", "Too low!"),
];

pub const DIGIT_GLYPHS: &[(&str, &str)] = &[
    ("0️⃣", "0"), ("1️⃣", "1"), ("2️⃣", "2"), ("3️⃣", "3"), ("4️⃣", "4"),
    ("5️⃣", "5"), ("6️⃣", "6"), ("7️⃣", "7"), ("8️⃣", "8"), ("9️⃣", "9"),
    ("🔟", "10"),
];

/// Turns glyph text into readable text before it reaches the console.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    phrases: Vec<(String, String)>,
    digits: Vec<(String, String)>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES.iter().map(|(glyph, text)| (glyph.to_string(), text.to_string())))
    }
}

impl Translator {
    pub fn new(phrases: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            phrases: phrases.into_iter().collect(),
            digits: DIGIT_GLYPHS.iter()
                .map(|(glyph, digits)| (glyph.to_string(), digits.to_string()))
                .collect(),
        }
    }

    /// A translator that leaves text untouched.
    pub fn identity() -> Self {
        Self {
            phrases: vec![],
            digits: vec![],
        }
    }

    /// Replaces every phrase in table order, then every digit glyph.
    pub fn translate(&self, text: &str) -> String {
        let phrased = self.phrases.iter()
            .fold(text.to_string(), |out, (glyph, phrase)| out.replace(glyph.as_str(), phrase));

        self.digits.iter()
            .fold(phrased, |out, (glyph, digits)| out.replace(glyph.as_str(), digits))
    }

    /// Prompts are translated only when the whole prompt is a known phrase.
    pub fn translate_prompt<'a>(&'a self, text: &'a str) -> &'a str {
        self.phrases.iter()
            .find(|(glyph, _)| glyph == text)
            .map(|(_, phrase)| phrase.as_str())
            .unwrap_or(text)
    }
}
