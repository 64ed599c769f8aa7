use serde::{Deserialize, Serialize};

use super::error::ComprobanteError;

/// Largest value representable in the fixed 6-digit folio format.
pub const FOLIO_MAX: u32 = 999_999;

/// Document folio, rendered as exactly six zero-padded digits.
///
/// Construction enforces the width: values above [`FOLIO_MAX`] are rejected
/// rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Folio(u32);

impl Folio {
    pub fn new(value: u32) -> Result<Self, ComprobanteError> {
        if value > FOLIO_MAX {
            return Err(ComprobanteError::InvalidFolio(format!(
                "folio {value} does not fit in 6 digits (max {FOLIO_MAX})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Folio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

impl TryFrom<u32> for Folio {
    type Error = ComprobanteError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Folio> for u32 {
    fn from(folio: Folio) -> u32 {
        folio.0
    }
}

/// Monotonic folio sequence generator.
///
/// Issues folios in strictly increasing order, with no gaps and no reuse.
/// The caller persists the last issued value and resumes with
/// [`FolioSequence::starting_at`]; the sequence itself holds no I/O.
#[derive(Debug, Clone)]
pub struct FolioSequence {
    next: u32,
}

impl FolioSequence {
    /// Create a new sequence starting at folio 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a sequence continuing from a given folio value.
    pub fn starting_at(next: u32) -> Result<Self, ComprobanteError> {
        if next > FOLIO_MAX {
            return Err(ComprobanteError::InvalidFolio(format!(
                "sequence cannot start at {next} (max {FOLIO_MAX})"
            )));
        }
        Ok(Self { next })
    }

    /// Issue the next folio. Fails once the 6-digit space is exhausted.
    pub fn next_folio(&mut self) -> Result<Folio, ComprobanteError> {
        let folio = Folio::new(self.next)?;
        self.next += 1;
        Ok(folio)
    }

    /// Preview the next folio without consuming it.
    pub fn peek(&self) -> Result<Folio, ComprobanteError> {
        Folio::new(self.next)
    }

    /// The raw value the next call to [`next_folio`](Self::next_folio) will issue.
    pub fn next_raw(&self) -> u32 {
        self.next
    }
}

impl Default for FolioSequence {
    fn default() -> Self {
        Self::new()
    }
}
