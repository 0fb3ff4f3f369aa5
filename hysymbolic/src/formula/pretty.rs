//! RcDoc-based pretty-printer with termcolor annotations for [`Formula`].
//!
//! Role
//! - Convert a formula into an annotated document suitable for width-aware rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! The layout uses the same fully parenthesized syntax as `Display`; when a formula fits in the
//! requested width the plain rendering is identical to `to_string()`. Longer conjunctions and
//! disjunctions are broken before their connective.
use std::io::{self, Write};

use pretty::{RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    expression::Expression,
    formula::{Formula, FormulaCell, FormulaKind},
    variable::Variables,
};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // periods
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Keyword,  // True, False, forall
    Operator, // and, or, !, =, <, ...
    Ident,    // bound variables
    Term,     // arithmetic terms
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    _ => Color::Magenta,
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Term => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

/// Rendering options for [`PrettyFormula::pretty_print_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Line width; `None` means the terminal width (or 80 when it cannot be determined).
    pub width: Option<usize>,
    pub color: ColorChoice,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            width: None,
            color: ColorChoice::Auto,
        }
    }
}

impl PrettyConfig {
    /// Resolved line width.
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(terminal_width)
    }
}

fn styled(style: Style, s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(style)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn kw(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Keyword, s)
}

fn op(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Operator, s)
}

fn term(e: &Expression) -> RcDoc<'static, Style> {
    RcDoc::as_string(e.to_string()).annotate(Style::Term)
}

fn binders(vars: &Variables) -> RcDoc<'static, Style> {
    RcDoc::as_string(vars.to_string()).annotate(Style::Ident)
}

fn relation(
    e1: &Expression,
    kind: FormulaKind,
    e2: &Expression,
    depth: u8,
) -> RcDoc<'static, Style> {
    let symbol = kind.relational_symbol().unwrap_or_default();
    lparen(depth)
        .append(term(e1))
        .append(RcDoc::space())
        .append(op(symbol))
        .append(RcDoc::space())
        .append(term(e2))
        .append(rparen(depth))
}

fn connective(f1: &Formula, symbol: &'static str, f2: &Formula, depth: u8) -> RcDoc<'static, Style> {
    lparen(depth)
        .append(to_doc_with_depth(f1, depth + 1))
        .append(RcDoc::line())
        .append(op(symbol))
        .append(RcDoc::space())
        .append(to_doc_with_depth(f2, depth + 1))
        .nest(1)
        .append(rparen(depth))
        .group()
}

/// Depth-aware document builder that colors parentheses by nesting level.
fn to_doc_with_depth(f: &Formula, depth: u8) -> RcDoc<'static, Style> {
    let depth = depth % 6;
    match f.cell() {
        FormulaCell::True => kw("True"),
        FormulaCell::False => kw("False"),
        FormulaCell::Eq(e1, e2)
        | FormulaCell::Neq(e1, e2)
        | FormulaCell::Lt(e1, e2)
        | FormulaCell::Leq(e1, e2)
        | FormulaCell::Gt(e1, e2)
        | FormulaCell::Geq(e1, e2) => relation(e1, f.get_kind(), e2, depth),
        FormulaCell::And(f1, f2) => connective(f1, "and", f2, depth),
        FormulaCell::Or(f1, f2) => connective(f1, "or", f2, depth),
        FormulaCell::Not(inner) => op("!")
            .append(lparen(depth))
            .append(to_doc_with_depth(inner, depth + 1))
            .append(rparen(depth))
            .group(),
        FormulaCell::Forall { vars, body } => kw("forall")
            .append(lparen(depth))
            .append(binders(vars))
            .append(styled(Style::Punct, "."))
            .append(RcDoc::line())
            .append(to_doc_with_depth(body, depth + 1))
            .nest(2)
            .append(rparen(depth))
            .group(),
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Convenience: retrieve the width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Pretty-printing conveniences for [`Formula`].
pub trait PrettyFormula {
    /// Build an RcDoc representation of this formula with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self) -> io::Result<()> {
        self.pretty_print_with(&PrettyConfig::default())
    }

    /// Print to stdout using the given width and color choice.
    fn pretty_print_with(&self, config: &PrettyConfig) -> io::Result<()>;

    /// Format into a plain string (no colors) at width 80.
    fn pretty_string(&self) -> String {
        self.pretty_string_with_width(80)
    }

    /// Format into a plain string (no colors) at the given width.
    fn pretty_string_with_width(&self, width: usize) -> String;
}

impl PrettyFormula for Formula {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc_with_depth(self, 0)
    }

    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    fn pretty_print_with(&self, config: &PrettyConfig) -> io::Result<()> {
        let stdout = StandardStream::stdout(config.color);
        let mut stdout = stdout.lock();
        self.pretty_render_to(config.effective_width(), &mut stdout)?;
        writeln!(stdout)
    }

    fn pretty_string_with_width(&self, width: usize) -> String {
        let mut buf = String::new();
        let _ = self.pretty_doc().render_fmt(width, &mut buf);
        buf
    }
}
