//! Published solution counts (OEIS A000170).

const SOLUTION_COUNTS: [u64; 21] = [
    1,
    1,
    0,
    0,
    2,
    10,
    4,
    40,
    92,
    352,
    724,
    2_680,
    14_200,
    73_712,
    365_596,
    2_279_184,
    14_772_512,
    95_815_104,
    666_090_624,
    4_968_057_848,
    39_029_188_884,
];

/// Number of distinct solutions on an `n`×`n` board, if tabulated.
///
/// ```
/// use u_nqueens::known_solution_count;
///
/// assert_eq!(known_solution_count(8), Some(92));
/// assert_eq!(known_solution_count(40), None);
/// ```
pub fn known_solution_count(n: usize) -> Option<u64> {
    SOLUTION_COUNTS.get(n).copied()
}
