//! Langton's loops.

/// Rules as `(0oSURDL, result)`: the current state, then the states
/// of the neighbors up, right, down and left, as octal digits.
pub(super) const RULES: [(u16, u8); 219] = [
    (0o00000, 0),
    (0o00001, 2),
    (0o00002, 0),
    (0o00003, 0),
    (0o00005, 0),
    (0o00006, 3),
    (0o00007, 1),
    (0o00011, 2),
    (0o00012, 2),
    (0o00013, 2),
    (0o00021, 2),
    (0o00022, 0),
    (0o00023, 0),
    (0o00026, 2),
    (0o00027, 2),
    (0o00032, 0),
    (0o00052, 5),
    (0o00062, 2),
    (0o00072, 2),
    (0o00102, 2),
    (0o00112, 0),
    (0o00202, 0),
    (0o00203, 0),
    (0o00205, 0),
    (0o00212, 5),
    (0o00222, 0),
    (0o00232, 2),
    (0o00522, 2),
    (0o01232, 1),
    (0o01242, 1),
    (0o01252, 5),
    (0o01262, 1),
    (0o01272, 1),
    (0o01275, 1),
    (0o01422, 1),
    (0o01432, 1),
    (0o01442, 1),
    (0o01472, 1),
    (0o01625, 1),
    (0o01722, 1),
    (0o01725, 5),
    (0o01752, 1),
    (0o01762, 1),
    (0o01772, 1),
    (0o02527, 1),
    (0o10001, 1),
    (0o10006, 1),
    (0o10007, 7),
    (0o10011, 1),
    (0o10012, 1),
    (0o10021, 1),
    (0o10024, 4),
    (0o10027, 7),
    (0o10051, 1),
    (0o10101, 1),
    (0o10111, 1),
    (0o10124, 4),
    (0o10127, 7),
    (0o10202, 6),
    (0o10212, 1),
    (0o10221, 1),
    (0o10224, 4),
    (0o10226, 3),
    (0o10227, 7),
    (0o10232, 7),
    (0o10242, 4),
    (0o10262, 6),
    (0o10264, 4),
    (0o10267, 7),
    (0o10271, 0),
    (0o10272, 7),
    (0o10542, 7),
    (0o11112, 1),
    (0o11122, 1),
    (0o11124, 4),
    (0o11125, 1),
    (0o11126, 1),
    (0o11127, 7),
    (0o11152, 2),
    (0o11212, 1),
    (0o11222, 1),
    (0o11224, 4),
    (0o11225, 1),
    (0o11227, 7),
    (0o11232, 1),
    (0o11242, 4),
    (0o11262, 1),
    (0o11272, 7),
    (0o11322, 1),
    (0o12224, 4),
    (0o12227, 7),
    (0o12243, 4),
    (0o12254, 7),
    (0o12324, 4),
    (0o12327, 7),
    (0o12425, 5),
    (0o12426, 7),
    (0o12527, 5),
    (0o20001, 2),
    (0o20002, 2),
    (0o20004, 2),
    (0o20007, 1),
    (0o20012, 2),
    (0o20015, 2),
    (0o20021, 2),
    (0o20022, 2),
    (0o20023, 2),
    (0o20024, 2),
    (0o20025, 0),
    (0o20026, 2),
    (0o20027, 2),
    (0o20032, 6),
    (0o20042, 3),
    (0o20051, 7),
    (0o20052, 2),
    (0o20057, 5),
    (0o20072, 2),
    (0o20102, 2),
    (0o20112, 2),
    (0o20122, 2),
    (0o20142, 2),
    (0o20172, 2),
    (0o20202, 2),
    (0o20203, 2),
    (0o20205, 2),
    (0o20207, 3),
    (0o20212, 2),
    (0o20215, 2),
    (0o20221, 2),
    (0o20222, 2),
    (0o20227, 2),
    (0o20232, 1),
    (0o20242, 2),
    (0o20245, 2),
    (0o20252, 0),
    (0o20255, 2),
    (0o20262, 2),
    (0o20272, 2),
    (0o20312, 2),
    (0o20321, 6),
    (0o20322, 6),
    (0o20342, 2),
    (0o20422, 2),
    (0o20512, 2),
    (0o20521, 2),
    (0o20522, 2),
    (0o20552, 1),
    (0o20572, 5),
    (0o20622, 2),
    (0o20672, 2),
    (0o20712, 2),
    (0o20722, 2),
    (0o20742, 2),
    (0o20772, 2),
    (0o21122, 2),
    (0o21126, 1),
    (0o21222, 2),
    (0o21224, 2),
    (0o21226, 2),
    (0o21227, 2),
    (0o21422, 2),
    (0o21522, 2),
    (0o21622, 2),
    (0o21722, 2),
    (0o22227, 2),
    (0o22244, 2),
    (0o22246, 2),
    (0o22276, 2),
    (0o22277, 2),
    (0o30001, 3),
    (0o30002, 2),
    (0o30004, 1),
    (0o30007, 6),
    (0o30012, 3),
    (0o30042, 1),
    (0o30062, 2),
    (0o30102, 1),
    (0o30122, 0),
    (0o30251, 1),
    (0o40112, 0),
    (0o40122, 0),
    (0o40125, 0),
    (0o40212, 0),
    (0o40222, 1),
    (0o40232, 6),
    (0o40252, 0),
    (0o40322, 1),
    (0o50002, 2),
    (0o50021, 5),
    (0o50022, 5),
    (0o50023, 2),
    (0o50027, 2),
    (0o50052, 0),
    (0o50202, 2),
    (0o50212, 2),
    (0o50215, 2),
    (0o50222, 0),
    (0o50224, 4),
    (0o50272, 2),
    (0o51212, 2),
    (0o51222, 0),
    (0o51242, 2),
    (0o51272, 2),
    (0o60001, 1),
    (0o60002, 1),
    (0o60212, 0),
    (0o61212, 5),
    (0o61213, 1),
    (0o61222, 5),
    (0o70007, 7),
    (0o70112, 0),
    (0o70122, 0),
    (0o70125, 0),
    (0o70212, 0),
    (0o70222, 1),
    (0o70225, 1),
    (0o70232, 1),
    (0o70252, 5),
    (0o70272, 0),
];

/// The initial loop, row by row.
pub(super) const SEED: [[u8; 15]; 10] = [
    [0, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0],
    [2, 1, 7, 0, 1, 4, 0, 1, 4, 2, 0, 0, 0, 0, 0],
    [2, 0, 2, 2, 2, 2, 2, 2, 0, 2, 0, 0, 0, 0, 0],
    [2, 7, 2, 0, 0, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0],
    [2, 1, 2, 0, 0, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0],
    [2, 0, 2, 0, 0, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0],
    [2, 7, 2, 0, 0, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0],
    [2, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 0],
    [2, 0, 7, 1, 0, 7, 1, 0, 7, 1, 1, 1, 1, 1, 2],
    [0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0],
];
