//! Message text builder
//!
//! Fluent builder for outbound messages. The same calls produce WhatsApp
//! plain text or Telegram HTML depending on the [`Markup`].

use ortho_client::Markup;

pub struct MessageBuilder {
    buf: String,
    markup: Markup,
}

impl MessageBuilder {
    pub fn new(markup: Markup) -> Self {
        Self {
            buf: String::with_capacity(512),
            markup,
        }
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    // === Text Output ===

    /// Write escaped text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        let escaped = self.escape(s);
        self.buf.push_str(&escaped);
        self.newline()
    }

    /// Write an empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write a bold line
    pub fn title(&mut self, s: &str) -> &mut Self {
        let escaped = self.escape(s);
        match self.markup {
            Markup::Plain => {
                self.buf.push('*');
                self.buf.push_str(&escaped);
                self.buf.push('*');
            }
            Markup::Html => {
                self.buf.push_str("<b>");
                self.buf.push_str(&escaped);
                self.buf.push_str("</b>");
            }
        }
        self.newline()
    }

    /// Write `Label: value` with the label in bold
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        let label = self.escape(label);
        let value = self.escape(value);
        match self.markup {
            Markup::Plain => self.buf.push_str(&format!("*{}:* {}", label, value)),
            Markup::Html => self.buf.push_str(&format!("<b>{}:</b> {}", label, value)),
        }
        self.newline()
    }

    /// Write a field only when `value` is present
    pub fn optional_field(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.field(label, value);
        }
        self
    }

    /// Finish, dropping the trailing newline
    pub fn build(self) -> String {
        let mut text = self.buf;
        while text.ends_with('\n') {
            text.pop();
        }
        text
    }

    fn escape(&self, s: &str) -> String {
        match self.markup {
            Markup::Plain => s.to_string(),
            Markup::Html => escape_html(s),
        }
    }
}

/// Escape the characters the Telegram HTML parser treats as markup
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
