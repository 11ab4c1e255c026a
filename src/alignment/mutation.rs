/// The twelve possible single-base substitution classes over A, C, G, T.
/// Ordered with the transition pairs first, matching the conventional
/// signature-table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SubstitutionClass {
    CtoT,
    GtoA,
    AtoG,
    TtoC,
    CtoA,
    GtoT,
    AtoC,
    TtoG,
    CtoG,
    GtoC,
    AtoT,
    TtoA,
}

impl SubstitutionClass {
    pub const ALL: [SubstitutionClass; 12] = [
        SubstitutionClass::CtoT,
        SubstitutionClass::GtoA,
        SubstitutionClass::AtoG,
        SubstitutionClass::TtoC,
        SubstitutionClass::CtoA,
        SubstitutionClass::GtoT,
        SubstitutionClass::AtoC,
        SubstitutionClass::TtoG,
        SubstitutionClass::CtoG,
        SubstitutionClass::GtoC,
        SubstitutionClass::AtoT,
        SubstitutionClass::TtoA,
    ];

    /// Classify a reference/query base pair. Returns `None` for identical
    /// bases, gaps, N, or ambiguity codes.
    pub fn from_bases(ref_base: u8, alt_base: u8) -> Option<Self> {
        use SubstitutionClass::*;
        match (ref_base, alt_base) {
            (b'C', b'T') => Some(CtoT),
            (b'G', b'A') => Some(GtoA),
            (b'A', b'G') => Some(AtoG),
            (b'T', b'C') => Some(TtoC),
            (b'C', b'A') => Some(CtoA),
            (b'G', b'T') => Some(GtoT),
            (b'A', b'C') => Some(AtoC),
            (b'T', b'G') => Some(TtoG),
            (b'C', b'G') => Some(CtoG),
            (b'G', b'C') => Some(GtoC),
            (b'A', b'T') => Some(AtoT),
            (b'T', b'A') => Some(TtoA),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        use SubstitutionClass::*;
        match self {
            CtoT => "C>T",
            GtoA => "G>A",
            AtoG => "A>G",
            TtoC => "T>C",
            CtoA => "C>A",
            GtoT => "G>T",
            AtoC => "A>C",
            TtoG => "T>G",
            CtoG => "C>G",
            GtoC => "G>C",
            AtoT => "A>T",
            TtoA => "T>A",
        }
    }

    /// C>T and G>A are the substitutions attributed to APOBEC3 deaminase
    /// activity.
    pub fn is_apobec3(&self) -> bool {
        matches!(self, SubstitutionClass::CtoT | SubstitutionClass::GtoA)
    }
}

/// Per-genome counts for each of the twelve substitution classes.
#[derive(Debug, Clone, Default)]
pub struct SignatureCounts([u64; 12]);

impl SignatureCounts {
    pub fn record(&mut self, class: SubstitutionClass) {
        self.0[class as usize] += 1;
    }

    pub fn get(&self, class: SubstitutionClass) -> u64 {
        self.0[class as usize]
    }

    pub fn apobec3_total(&self) -> u64 {
        self.get(SubstitutionClass::CtoT) + self.get(SubstitutionClass::GtoA)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubstitutionClass, u64)> + '_ {
        SubstitutionClass::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

/// The three-base window centered on `pos`, or `None` at the sequence
/// boundaries. The first position and the last two are treated as
/// boundary positions and carry no context.
pub fn trinucleotide_context(seq: &[u8], pos: usize) -> Option<[u8; 3]> {
    if pos == 0 || seq.len() < 3 || pos >= seq.len() - 2 {
        return None;
    }
    Some([seq[pos - 1], seq[pos], seq[pos + 1]])
}
