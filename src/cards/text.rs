//! Description templates and token substitution.
//!
//! Card descriptions are stored as *templates*: fixed phrase fragments with
//! placeholder tokens (`!D!`, `!B!`, `!M!`) standing in for live numbers
//! and `NL` marking line breaks. The host's text system owns final display
//! rendering - keyword highlighting, localization, dynamic coloring of
//! modified numbers. `substitute` here is a plain-text stand-in for that
//! system, good enough for logs, tests, and `Display`.

use super::descriptor::CardDescriptor;

/// Placeholder for the card's current damage.
pub const DAMAGE_TOKEN: &str = "!D!";
/// Placeholder for the card's current block.
pub const BLOCK_TOKEN: &str = "!B!";
/// Placeholder for the card's current magic number.
pub const MAGIC_TOKEN: &str = "!M!";
/// Line-break marker.
pub const LINE_BREAK: &str = "NL";

const ETHEREAL_CLAUSE: &str = "Ethereal. NL ";
const DAMAGE_CLAUSE: &str = "Deal !D! damage. ";
const BLOCK_CLAUSE: &str = "Gain !B! block. ";
const EXHAUST_CLAUSE: &str = " NL Exhaust.";

/// Render a card's description template from its current attributes.
///
/// Clause order is fixed: ethereal, damage, block, exhaust. The ethereal
/// and exhaust clauses key off the current *value* of their flags while
/// the damage and block clauses key off *presence* - the asymmetry is
/// longstanding observable behavior and is kept as-is.
#[must_use]
pub fn render_template(card: &CardDescriptor) -> String {
    let mut template = String::new();

    if card.ethereal.unwrap_or(false) {
        template.push_str(ETHEREAL_CLAUSE);
    }
    if card.damage.is_some() {
        template.push_str(DAMAGE_CLAUSE);
    }
    if card.block.is_some() {
        template.push_str(BLOCK_CLAUSE);
    }
    if card.exhaust.unwrap_or(false) {
        template.push_str(EXHAUST_CLAUSE);
    }

    template
}

/// Substitute a template's tokens with the card's live values and resolve
/// `NL` markers into newlines.
///
/// ```
/// use cardsmith::cards::{text, CardDescriptor};
/// use cardsmith::core::{CardColor, CardKind, CardRarity, CardTarget};
///
/// let card = CardDescriptor::new(
///     "demo:Slam", "Slam", "slam.png",
///     CardColor::Red, CardKind::Attack, CardRarity::Common, CardTarget::Enemy,
/// )
/// .with_damage(8)
/// .finish();
///
/// assert_eq!(text::substitute(&card.description, &card), "Deal 8 damage.");
/// ```
#[must_use]
pub fn substitute(template: &str, card: &CardDescriptor) -> String {
    let filled = template
        .replace(DAMAGE_TOKEN, &card.damage.unwrap_or(0).to_string())
        .replace(BLOCK_TOKEN, &card.block.unwrap_or(0).to_string())
        .replace(MAGIC_TOKEN, &card.magic_number.unwrap_or(0).to_string());

    filled
        .split(LINE_BREAK)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
