/// The five questionnaire sections, fixed by the census design.
/// Section 1 has no response table of its own: it is satisfied by the
/// holder record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    HolderInfo,
    Labour,
    PermanentWorkers,
    Machinery,
    LandUse,
}

pub const TOTAL_SECTIONS: u32 = 5;

impl Section {
    pub const ALL: [Section; 5] = [
        Section::HolderInfo,
        Section::Labour,
        Section::PermanentWorkers,
        Section::Machinery,
        Section::LandUse,
    ];

    /// 1-based section number as stored in holder_survey_progress.section_no
    pub fn number(&self) -> u32 {
        match self {
            Section::HolderInfo => 1,
            Section::Labour => 2,
            Section::PermanentWorkers => 3,
            Section::Machinery => 4,
            Section::LandUse => 5,
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Section::HolderInfo),
            2 => Some(Section::Labour),
            3 => Some(Section::PermanentWorkers),
            4 => Some(Section::Machinery),
            5 => Some(Section::LandUse),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::HolderInfo => "Holder Information",
            Section::Labour => "Holding Labour",
            Section::PermanentWorkers => "Permanent Workers",
            Section::Machinery => "Agricultural Machinery",
            Section::LandUse => "Land Use",
        }
    }

    /// Response table backing this section, if any.
    pub fn table(&self) -> Option<&'static str> {
        match self {
            Section::HolderInfo => None,
            Section::Labour => Some("holding_labour"),
            Section::PermanentWorkers => Some("holding_labour_permanent"),
            Section::Machinery => Some("agricultural_machinery"),
            Section::LandUse => Some("land_use"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_number(s.number()), Some(s));
        }
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(6), None);
    }
}
