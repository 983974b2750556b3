use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use numeric::{Token, TokenKind};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// One row per scanned token: position, kind, text and value
    pub fn format_tokens(&self, tokens: &[Token]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Pos").set_alignment(CellAlignment::Right),
            Cell::new("Kind").set_alignment(CellAlignment::Left),
            Cell::new("Text").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));

        for token in tokens {
            table.add_row(Row::from(vec![
                Cell::new(token.position).set_alignment(CellAlignment::Right),
                Cell::new(token.kind_name()),
                Cell::new(&token.text),
                Cell::new(self.token_value(token)).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }

    pub fn format_postfix(&self, postfix: &[Token]) -> String {
        let rpn = postfix
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(vec![Cell::new("Postfix"), Cell::new(rpn)]));

        table.to_string()
    }

    fn token_value(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::Number(value) => value.to_string(),
            TokenKind::Unit(unit) => format!("x{}", unit.scale),
            TokenKind::Operator
            | TokenKind::ParenOpen
            | TokenKind::ParenClose
            | TokenKind::Symbol => String::new(),
        }
    }
}
