//! Chou-Reggia loops.

/// Rules as `(0oSURDL, result)`: the current state, then the states
/// of the neighbors up, right, down and left, as octal digits.
pub(super) const RULES: [(u16, u8); 65] = [
    (0o00000, 0),
    (0o00044, 0),
    (0o00054, 7),
    (0o00010, 0),
    (0o00011, 0),
    (0o00033, 0),
    (0o00404, 0),
    (0o00444, 5),
    (0o00410, 0),
    (0o00104, 0),
    (0o00101, 0),
    (0o00174, 0),
    (0o00300, 0),
    (0o00301, 0),
    (0o00303, 0),
    (0o00704, 0),
    (0o00703, 0),
    (0o00710, 4),
    (0o00711, 0),
    (0o04000, 0),
    (0o04007, 0),
    (0o04710, 0),
    (0o05000, 7),
    (0o01700, 0),
    (0o07000, 0),
    (0o07007, 7),
    (0o07101, 0),
    (0o40010, 1),
    (0o40031, 3),
    (0o40103, 3),
    (0o40710, 3),
    (0o41103, 3),
    (0o43103, 3),
    (0o50003, 3),
    (0o50333, 0),
    (0o10004, 5),
    (0o10001, 1),
    (0o10041, 4),
    (0o10104, 4),
    (0o10130, 1),
    (0o10301, 1),
    (0o10713, 1),
    (0o14041, 4),
    (0o14104, 4),
    (0o11104, 4),
    (0o13301, 1),
    (0o17771, 1),
    (0o30401, 1),
    (0o30501, 1),
    (0o30514, 1),
    (0o30714, 1),
    (0o34401, 1),
    (0o34501, 1),
    (0o35401, 0),
    (0o31400, 1),
    (0o37771, 1),
    (0o70000, 0),
    (0o70033, 7),
    (0o70710, 0),
    (0o70714, 1),
    (0o70711, 0),
    (0o71700, 0),
    (0o73000, 7),
    (0o77007, 0),
    (0o77071, 1),
];

/// The initial seed, row by row.
pub(super) const SEED: [[u8; 3]; 2] = [
    [1, 1, 0],
    [3, 4, 1],
];
