//! Presentation-side row ordering. Engines always emit `Case::ALL` order;
//! a `CaseOrder` only changes the order rows are read back in.

use alloc::vec::Vec;

use crate::error::ProtocolError;
use crate::morphology::Case;
use crate::paradigm::{AdjectiveCaseRow, AdjectivePluralRow, AdjectiveParadigm, CaseRow, NounCaseTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaseOrder([Case; 7]);

impl CaseOrder {
    pub const CANONICAL: CaseOrder = CaseOrder(Case::ALL);

    /// Row order the dictionary front-end shows by default.
    pub const DISPLAY_DEFAULT: CaseOrder = CaseOrder([
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Locative,
        Case::Dative,
        Case::Instrumental,
        Case::Vocative,
    ]);

    pub fn new(cases: [Case; 7]) -> Result<Self, ProtocolError> {
        let mut seen = [false; 7];
        for case in cases {
            if core::mem::replace(&mut seen[case.index()], true) {
                return Err(ProtocolError::InvalidCaseOrder);
            }
        }
        Ok(Self(cases))
    }

    /// Parses names such as `["nom", "acc", "gen", "loc", "dat", "ins", "voc"]`.
    pub fn parse<I, S>(names: I) -> Result<Self, ProtocolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cases = names
            .into_iter()
            .map(|n| n.as_ref().parse::<Case>())
            .collect::<Result<Vec<_>, _>>()?;
        let cases: [Case; 7] = cases.try_into().map_err(|_| ProtocolError::InvalidCaseOrder)?;
        Self::new(cases)
    }

    pub fn cases(&self) -> &[Case; 7] {
        &self.0
    }

    pub fn noun_rows<'a>(&'a self, table: &'a NounCaseTable) -> impl Iterator<Item = &'a CaseRow> + 'a {
        self.0.iter().map(move |case| table.row(*case))
    }

    /// Adjective rows in this order; the vocative is skipped.
    pub fn adjective_rows<'a>(
        &'a self,
        paradigm: &'a AdjectiveParadigm,
    ) -> impl Iterator<Item = (&'a AdjectiveCaseRow, &'a AdjectivePluralRow)> + 'a {
        self.0
            .iter()
            .filter_map(move |case| Some((paradigm.singular_row(*case)?, paradigm.plural_row(*case)?)))
    }
}

impl Default for CaseOrder {
    fn default() -> Self {
        Self::DISPLAY_DEFAULT
    }
}
