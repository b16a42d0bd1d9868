/// Cost-field markers
pub const IMPASSABLE: u8 = 255; // wall cost, never entered by the flood

/// Integration-field markers
pub const UNREACHABLE: u16 = u16::MAX; // no flood reached this cell
