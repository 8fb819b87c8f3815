//! Contradiction matrix cells: (improving, worsening) -> ordered principles.
//!
//! A curated subset of the classical 39x39 table. Cell order is meaningful
//! and preserved end to end: earlier principles are the stronger classical
//! recommendations for that conflict. Pairs not listed here resolve through
//! the fallback chain in `crate::matrix`. The table is not symmetric;
//! (a, b) and (b, a) are distinct cells.

/// (improving_id, worsening_id, principle ids in classical priority order)
pub const CELLS: &[(u8, u8, &[u8])] = &[
    // Row 1: weight of moving object
    (1, 3, &[15, 8, 29, 34]),
    (1, 5, &[29, 17, 38, 34]),
    (1, 7, &[29, 2, 40, 28]),
    (1, 9, &[2, 8, 15, 38]),
    (1, 10, &[8, 10, 18, 37]),
    (1, 11, &[10, 36, 37, 40]),
    (1, 12, &[10, 14, 35, 40]),
    (1, 13, &[1, 35, 19, 39]),
    (1, 14, &[28, 27, 18, 40]),
    (1, 15, &[5, 34, 31, 35]),
    (1, 17, &[6, 29, 4, 38]),
    (1, 18, &[19, 1, 32]),
    (1, 19, &[35, 12, 34, 31]),
    (1, 21, &[12, 36, 18, 31]),
    (1, 22, &[6, 2, 34, 19]),
    (1, 23, &[5, 35, 3, 31]),
    (1, 24, &[10, 24, 35]),
    (1, 25, &[10, 35, 20, 28]),
    (1, 26, &[3, 26, 18, 31]),
    (1, 27, &[3, 11, 1, 27]),
    (1, 28, &[28, 27, 35, 26]),
    (1, 29, &[28, 35, 26, 18]),
    (1, 30, &[22, 21, 18, 27]),
    (1, 31, &[22, 35, 31, 39]),
    (1, 32, &[27, 28, 1, 36]),
    (1, 33, &[35, 3, 2, 24]),
    (1, 34, &[2, 27, 28, 11]),
    (1, 35, &[29, 5, 15, 8]),
    (1, 36, &[26, 30, 36, 34]),
    (1, 37, &[28, 29, 26, 32]),
    (1, 38, &[26, 35, 18, 19]),
    (1, 39, &[35, 3, 24, 37]),
    // Row 2: weight of stationary object
    (2, 10, &[8, 10, 19, 35]),
    (2, 11, &[13, 29, 10, 18]),
    (2, 12, &[13, 10, 29, 14]),
    (2, 13, &[26, 39, 1, 40]),
    (2, 14, &[28, 2, 10, 27]),
    (2, 17, &[28, 19, 32, 22]),
    (2, 19, &[18, 19, 28, 1]),
    (2, 25, &[10, 20, 35, 26]),
    (2, 27, &[10, 28, 8, 3]),
    (2, 32, &[28, 1, 9]),
    (2, 36, &[1, 10, 26, 39]),
    (2, 39, &[28, 27, 15, 3]),
    // Row 9: speed
    (9, 1, &[2, 28, 13, 38]),
    (9, 10, &[13, 28, 15, 19]),
    (9, 11, &[6, 18, 38, 40]),
    (9, 12, &[35, 15, 18, 34]),
    (9, 13, &[28, 33, 1, 18]),
    (9, 14, &[8, 3, 26, 14]),
    (9, 17, &[28, 30, 36, 2]),
    (9, 19, &[8, 15, 35, 38]),
    (9, 25, &[]),
    (9, 27, &[11, 35, 27, 28]),
    (9, 28, &[28, 32, 1, 24]),
    (9, 33, &[32, 28, 13, 12]),
    (9, 36, &[10, 28, 4, 34]),
    (9, 38, &[3, 34, 27, 16]),
    // Row 10: force
    (10, 1, &[8, 1, 37, 18]),
    (10, 9, &[13, 28, 15, 12]),
    (10, 11, &[18, 21, 11]),
    (10, 14, &[35, 10, 14, 27]),
    (10, 21, &[19, 35, 18, 37]),
    (10, 27, &[3, 35, 13, 21]),
    (10, 36, &[26, 35, 10, 18]),
    (10, 39, &[3, 28, 35, 37]),
    // Row 11: stress or pressure
    (11, 1, &[10, 36, 37, 40]),
    (11, 9, &[6, 35, 36]),
    (11, 14, &[9, 18, 3, 40]),
    (11, 27, &[10, 13, 19, 35]),
    (11, 36, &[19, 1, 35]),
    // Row 12: shape
    (12, 1, &[8, 10, 29, 40]),
    (12, 9, &[35, 15, 34, 18]),
    (12, 13, &[33, 1, 18, 4]),
    (12, 14, &[30, 14, 10, 40]),
    (12, 21, &[4, 6, 2]),
    (12, 27, &[10, 40, 16]),
    (12, 32, &[1, 32, 17, 28]),
    (12, 36, &[16, 29, 1, 28]),
    // Row 13: stability of composition
    (13, 1, &[21, 35, 2, 39]),
    (13, 9, &[33, 15, 28, 18]),
    (13, 14, &[17, 9, 15]),
    (13, 17, &[35, 1, 32]),
    (13, 21, &[32, 35, 27, 31]),
    (13, 27, &[]),
    (13, 35, &[35, 30, 34, 2]),
    (13, 36, &[2, 35, 22, 26]),
    (13, 39, &[23, 35, 40, 3]),
    // Row 14: strength
    (14, 1, &[1, 8, 40, 15]),
    (14, 2, &[40, 26, 27, 1]),
    (14, 9, &[8, 13, 26, 14]),
    (14, 11, &[10, 18, 3, 14]),
    (14, 13, &[13, 17, 35]),
    (14, 17, &[30, 10, 40]),
    (14, 21, &[10, 26, 35, 28]),
    (14, 25, &[29, 3, 28, 10]),
    (14, 26, &[29, 10, 27]),
    (14, 27, &[11, 3]),
    (14, 32, &[3, 27, 16]),
    (14, 36, &[2, 13, 28]),
    (14, 39, &[29, 35, 10, 14]),
    // Row 15: duration of action of moving object
    (15, 1, &[19, 5, 34, 31]),
    (15, 9, &[3, 35, 5]),
    (15, 14, &[27, 3, 26]),
    (15, 19, &[28, 6, 35, 18]),
    (15, 27, &[11, 2, 13]),
    (15, 36, &[10, 4, 29, 15]),
    (15, 39, &[35, 17, 14, 19]),
    // Row 17: temperature
    (17, 1, &[36, 22, 6, 38]),
    (17, 9, &[2, 28, 36, 30]),
    (17, 13, &[1, 35, 32]),
    (17, 14, &[10, 30, 22, 40]),
    (17, 21, &[2, 14, 17, 25]),
    (17, 27, &[19, 35, 3, 10]),
    (17, 36, &[2, 17, 16]),
    (17, 39, &[15, 28, 35]),
    // Row 19: use of energy by moving object
    (19, 1, &[12, 18, 28, 31]),
    (19, 9, &[8, 35, 5]),
    (19, 21, &[6, 19, 37, 18]),
    (19, 27, &[19, 21, 11, 27]),
    (19, 36, &[2, 29, 27, 28]),
    (19, 39, &[12, 28, 35]),
    // Row 21: power
    (21, 1, &[8, 36, 38, 31]),
    (21, 9, &[15, 35, 2]),
    (21, 12, &[29, 14, 2, 40]),
    (21, 14, &[26, 10, 28]),
    (21, 17, &[2, 14, 17, 25]),
    (21, 19, &[16, 6, 19, 37]),
    (21, 22, &[10, 35, 38]),
    (21, 27, &[19, 24, 26, 31]),
    (21, 31, &[2, 35, 18]),
    (21, 36, &[20, 19, 30, 34]),
    (21, 38, &[28, 2, 17]),
    (21, 39, &[28, 35, 34]),
    // Row 23: loss of substance
    (23, 1, &[35, 6, 23, 40]),
    (23, 9, &[35, 29, 34, 28]),
    (23, 14, &[35, 28, 31, 40]),
    (23, 25, &[15, 18, 35, 10]),
    (23, 27, &[10, 29, 39, 35]),
    (23, 36, &[35, 10, 28, 24]),
    (23, 39, &[28, 35, 10, 23]),
    // Row 25: loss of time
    (25, 1, &[10, 20, 37, 35]),
    (25, 9, &[]),
    (25, 14, &[29, 3, 28, 18]),
    (25, 21, &[35, 20, 10, 6]),
    (25, 26, &[35, 38, 18, 16]),
    (25, 27, &[10, 30, 4]),
    (25, 32, &[35, 28, 34, 4]),
    (25, 36, &[6, 29]),
    (25, 38, &[24, 28, 35, 30]),
    (25, 39, &[]),
    // Row 26: quantity of substance
    (26, 1, &[35, 6, 18, 31]),
    (26, 14, &[14, 35, 34, 10]),
    (26, 25, &[35, 38, 18, 16]),
    (26, 27, &[18, 3, 28, 40]),
    (26, 39, &[13, 29, 3, 27]),
    // Row 27: reliability
    (27, 1, &[3, 8, 10, 40]),
    (27, 9, &[21, 35, 11, 28]),
    (27, 14, &[11, 28]),
    (27, 17, &[3, 35, 10]),
    (27, 21, &[21, 11, 26, 31]),
    (27, 25, &[10, 30, 4]),
    (27, 32, &[]),
    (27, 33, &[27, 17, 40]),
    (27, 36, &[13, 35, 1]),
    (27, 38, &[11, 13, 27]),
    (27, 39, &[1, 35, 29, 38]),
    // Row 28: measurement accuracy
    (28, 1, &[32, 35, 26, 28]),
    (28, 9, &[28, 13, 32, 24]),
    (28, 27, &[5, 11, 1, 23]),
    (28, 33, &[1, 13, 17, 34]),
    (28, 36, &[27, 35, 10, 34]),
    (28, 39, &[10, 34, 28, 32]),
    // Row 29: manufacturing precision
    (29, 1, &[28, 32, 13, 18]),
    (29, 9, &[10, 28, 32]),
    (29, 27, &[11, 32, 1]),
    (29, 32, &[]),
    (29, 36, &[26, 2, 18]),
    (29, 39, &[10, 18, 32, 39]),
    // Row 30: object-affected harmful factors
    (30, 1, &[22, 21, 27, 39]),
    (30, 9, &[22, 28, 33, 1]),
    (30, 14, &[18, 35, 37, 1]),
    (30, 27, &[27, 24, 2, 40]),
    (30, 36, &[22, 19, 29, 40]),
    (30, 39, &[22, 35, 13, 24]),
    // Row 31: object-generated harmful factors
    (31, 1, &[19, 22, 15, 39]),
    (31, 14, &[15, 35, 22, 2]),
    (31, 27, &[24, 2, 40, 39]),
    (31, 39, &[22, 35, 18, 39]),
    // Row 32: ease of manufacture
    (32, 1, &[28, 29, 15, 16]),
    (32, 9, &[35, 13, 8, 1]),
    (32, 14, &[1, 3, 10, 32]),
    (32, 27, &[]),
    (32, 36, &[27, 26, 1, 13]),
    (32, 39, &[35, 28, 2, 24]),
    // Row 33: ease of operation
    (33, 1, &[25, 2, 13, 15]),
    (33, 9, &[18, 13, 34]),
    (33, 14, &[32, 40, 3, 28]),
    (33, 27, &[17, 27, 8, 40]),
    (33, 36, &[32, 26, 12, 17]),
    (33, 38, &[1, 34, 12, 3]),
    (33, 39, &[15, 1, 28]),
    // Row 34: ease of repair
    (34, 1, &[2, 27, 35, 11]),
    (34, 9, &[34, 9]),
    (34, 27, &[]),
    (34, 36, &[35, 1, 13, 11]),
    (34, 39, &[1, 32, 10]),
    // Row 35: adaptability or versatility
    (35, 1, &[1, 6, 15, 8]),
    (35, 9, &[35, 10, 14]),
    (35, 13, &[35, 30, 14]),
    (35, 27, &[35, 13, 8, 24]),
    (35, 36, &[15, 29, 37, 28]),
    (35, 39, &[35, 28, 6, 37]),
    // Row 36: device complexity
    (36, 1, &[26, 30, 34, 36]),
    (36, 9, &[34, 10, 28]),
    (36, 14, &[2, 13, 28]),
    (36, 27, &[13, 35, 1]),
    (36, 33, &[27, 9, 26, 24]),
    (36, 38, &[15, 10, 37, 28]),
    (36, 39, &[12, 17, 28]),
    // Row 37: difficulty of detecting and measuring
    (37, 1, &[27, 26, 28, 13]),
    (37, 9, &[3, 4, 16, 35]),
    (37, 27, &[27, 40, 28, 8]),
    (37, 36, &[15, 10, 37, 28]),
    (37, 39, &[35, 18]),
    // Row 38: extent of automation
    (38, 1, &[28, 26, 18, 35]),
    (38, 9, &[10, 18]),
    (38, 14, &[25, 13]),
    (38, 27, &[11, 27, 32]),
    (38, 33, &[1, 12, 34, 3]),
    (38, 36, &[15, 24, 10]),
    (38, 39, &[5, 12, 35, 26]),
    // Row 39: productivity
    (39, 1, &[35, 26, 24, 37]),
    (39, 9, &[]),
    (39, 14, &[29, 28, 10, 18]),
    (39, 17, &[35, 21, 28, 10]),
    (39, 21, &[35, 20, 10]),
    (39, 25, &[]),
    (39, 27, &[35, 10, 38, 19]),
    (39, 32, &[35, 28, 2, 24]),
    (39, 33, &[1, 28, 7, 19]),
    (39, 36, &[12, 17, 28, 24]),
    (39, 38, &[5, 12, 35, 26]),
];

/// Broadly applicable principles used when no cell resolves: the classical
/// "most frequently recommended" set, in fixed priority order.
pub const DEFAULT_PRINCIPLES: &[u8] = &[35, 10, 1, 28, 2, 15, 19, 18, 32, 13];
