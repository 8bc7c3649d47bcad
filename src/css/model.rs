//! Style AST: selectors, declarations, rules, and their text rendering.
//!
//! Every type implements [`fmt::Display`] so the style viewer can print a
//! widget's own declarations back as CSS text.

use std::fmt;

/// A single selector component.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Type selector: matches the widget type name (e.g. `Button`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Pseudo-class: `:hover`, `:focus`.
    PseudoClass(String),
}

impl fmt::Display for SelectorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Universal => f.write_str("*"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Id(name) => write!(f, "#{name}"),
            Self::PseudoClass(name) => write!(f, ":{name}"),
        }
    }
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A sequence of components without combinators, e.g. `Button.primary:hover`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// One element in a selector chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorPart {
    Compound(CompoundSelector),
    Combinator(Combinator),
}

/// A full selector: compound selectors joined by combinators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    /// Alternating compound selectors and combinators, starting and ending
    /// with a compound.
    pub parts: Vec<SelectorPart>,
}

impl Selector {
    /// Whether the rightmost compound of this selector names `class`.
    pub fn targets_class(&self, class: &str) -> bool {
        match self.parts.last() {
            Some(SelectorPart::Compound(compound)) => compound
                .components
                .iter()
                .any(|c| matches!(c, SelectorComponent::Class(name) if name == class)),
            _ => false,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                SelectorPart::Compound(compound) => write!(f, "{compound}")?,
                SelectorPart::Combinator(Combinator::Descendant) => f.write_str(" ")?,
                SelectorPart::Combinator(Combinator::Child) => f.write_str(" > ")?,
            }
        }
        Ok(())
    }
}

/// A value token within a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationValue {
    /// An identifier like `red`, `bold`, `auto`.
    Ident(String),
    /// A bare number like `10` or `0.5`.
    Number(f32),
    /// A number with a unit suffix like `1fr`, `50%`.
    Dimension(f32, String),
    /// A hex color without the `#` prefix.
    Color(String),
    /// A quoted string value.
    String(String),
    /// A variable reference without the `$` prefix.
    Variable(String),
}

/// Print whole numbers without a fractional part (`40`, not `40.0`).
fn write_number(f: &mut fmt::Formatter<'_>, n: f32) -> fmt::Result {
    if n.fract() == 0.0 && n.abs() < 1e9 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for DeclarationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::Number(n) => write_number(f, *n),
            Self::Dimension(n, unit) => {
                write_number(f, *n)?;
                f.write_str(unit)
            }
            Self::Color(hex) => write!(f, "#{hex}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Variable(name) => write!(f, "${name}"),
        }
    }
}

/// A single property declaration, e.g. `color: red` or `width: 40`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, e.g. `"color"`.
    pub property: String,
    /// The declaration values.
    pub values: Vec<DeclarationValue>,
    /// Whether `!important` was specified.
    pub important: bool,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, values: Vec<DeclarationValue>, important: bool) -> Self {
        Self {
            property: property.into(),
            values,
            important,
        }
    }

    /// A single-number declaration such as `width: 40`.
    pub fn cells(property: impl Into<String>, cells: i32) -> Self {
        Self::new(property, vec![DeclarationValue::Number(cells as f32)], false)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.property)?;
        for value in &self.values {
            write!(f, " {value}")?;
        }
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// A rule: one or more selectors paired with declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        f.write_str(" {\n")?;
        for declaration in &self.declarations {
            writeln!(f, "  {declaration}")?;
        }
        f.write_str("}")
    }
}

/// A parsed stylesheet: a list of rule sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub rules: Vec<RuleSet>,
}

/// Render declarations one per line, the way the style viewer shows them.
pub fn declarations_to_css(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
