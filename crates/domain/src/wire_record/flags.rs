use std::fmt;

/// `dwFlags` of a record: the rank in the low byte plus node flags.
/// The codec carries these untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RecordFlags(u32);

impl RecordFlags {
    pub const RANK_CACHE_BIT: u32 = 0x0000_0001;
    pub const RANK_ROOT_HINT: u32 = 0x0000_0008;
    pub const RANK_OUTSIDE_GLUE: u32 = 0x0000_0020;
    pub const RANK_CACHE_NA_ADDITIONAL: u32 = 0x0000_0031;
    pub const RANK_CACHE_NA_AUTHORITY: u32 = 0x0000_0041;
    pub const RANK_CACHE_A_ADDITIONAL: u32 = 0x0000_0051;
    pub const RANK_CACHE_NA_ANSWER: u32 = 0x0000_0061;
    pub const RANK_CACHE_A_AUTHORITY: u32 = 0x0000_0071;
    pub const RANK_GLUE: u32 = 0x0000_0080;
    pub const RANK_NS_GLUE: u32 = 0x0000_0082;
    pub const RANK_CACHE_A_ANSWER: u32 = 0x0000_00C1;
    pub const RANK_ZONE: u32 = 0x0000_00F0;

    pub const FLAG_RECORD_WIRE_FORMAT: u32 = 0x0010_0000;
    pub const FLAG_AUTH_ZONE_ROOT: u32 = 0x2000_0000;
    pub const FLAG_ZONE_ROOT: u32 = 0x4000_0000;
    pub const FLAG_CACHE_DATA: u32 = 0x8000_0000;

    const RANK_MASK: u32 = 0x0000_00FF;

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn rank(&self) -> u8 {
        (self.0 & Self::RANK_MASK) as u8
    }

    pub fn contains(&self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    pub fn is_cached(&self) -> bool {
        self.0 & Self::RANK_CACHE_BIT != 0
    }

    pub fn is_zone_rank(&self) -> bool {
        u32::from(self.rank()) == Self::RANK_ZONE
    }
}

impl From<u32> for RecordFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<RecordFlags> for u32 {
    fn from(flags: RecordFlags) -> Self {
        flags.0
    }
}

impl fmt::Display for RecordFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
