//! Character to primitive-grid definitions
//!
//! Each definition is an 18-character string of nine 2-character primitive
//! codes, row-major over the 3x3 glyph grid.

use crate::io::configuration::DEFINITION_LENGTH;

/// Definition used for the space character: nine empty cells
pub const EMPTY_DEFINITION: &str = "000000000000000000";

/// Definition used for characters without an entry: a filled block
pub const FALLBACK_DEFINITION: &str = "101010101010101010";

const LETTER_DEFINITIONS: [(char, &str); 26] = [
    ('A', "201121101210103010"),
    ('B', "101121101213101222"),
    ('C', "201010101013231010"),
    ('D', "101021101410101022"),
    ('E', "201022101010231021"),
    ('F', "101022101110230000"),
    ('G', "201022100001231010"),
    ('H', "100110101110100010"),
    ('I', "141013141013141013"),
    ('J', "001013011013101013"),
    ('K', "101210101013103010"),
    ('L', "210000100001101010"),
    ('M', "101210101010220223"),
    ('N', "102110101110100010"),
    ('O', "201021101110231222"),
    ('P', "101121101222220000"),
    ('Q', "201121101210231023"),
    ('R', "101121101222103021"),
    ('S', "201011232101121022"),
    ('T', "101210001000001000"),
    ('U', "210020100010101210"),
    ('V', "210020100110231022"),
    ('W', "210120101010103010"),
    ('X', "101210141013103010"),
    ('Y', "101210231022001000"),
    ('Z', "141022202200101013"),
];

/// Look up the primitive definition for a character (case-insensitive)
pub fn definition_for(character: char) -> &'static str {
    if character == ' ' {
        return EMPTY_DEFINITION;
    }
    let upper = character.to_ascii_uppercase();
    LETTER_DEFINITIONS
        .iter()
        .find(|(letter, _)| *letter == upper)
        .map_or(FALLBACK_DEFINITION, |(_, definition)| definition)
}

/// Whether a definition draws nothing at all
pub fn is_empty_definition(definition: &str) -> bool {
    definition.chars().all(|c| c == '0')
}

/// Split a definition into its nine codes in row-major order
///
/// Trailing characters that do not form a full code are ignored.
pub fn codes(definition: &str) -> impl Iterator<Item = &str> {
    (0..DEFINITION_LENGTH / 2).filter_map(move |index| definition.get(index * 2..index * 2 + 2))
}
