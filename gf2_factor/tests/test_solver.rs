use gf2_factor::{answer_lines, decode, Decoded, FactorError, PairMode, Solver, SolverConfig};
use gf2_poly::Poly;

fn seeded(seed: u64) -> Solver {
    Solver::new(SolverConfig::default().with_seed(seed)).unwrap()
}

#[test]
fn test_solve_reference_pair() {
    // (x^17 + x^3 + 1)(x^23 + x^5 + 1)
    let lines = seeded(1).solve("32\n04c20129 00000100\n").unwrap();
    assert_eq!(lines, vec!["00020009 00800021", "00800021 00020009"]);
}

#[test]
fn test_solve_equal_degree_pair() {
    // (x^17 + x^3 + 1)(x^17 + x^14 + 1)
    let lines = seeded(2).solve("32\n80124009 00000004\n").unwrap();
    assert_eq!(lines, vec!["00020009 00024001", "00024001 00020009"]);
}

#[test]
fn test_solve_zero_word_adds_identity_pair() {
    let lines = seeded(3).solve("32\n00000031 00000000\n").unwrap();
    assert_eq!(
        lines,
        vec![
            "00000001 00000031",
            "00000007 0000000b",
            "0000000b 00000007",
            "00000031 00000001",
        ]
    );
}

#[test]
fn test_solve_zero_word_skips_identity_pair_when_too_wide() {
    // произведение степени 40 не помещается в одно слово
    let decoded: Decoded = decode(32, "04c20129 00000100").unwrap();
    let decoded = Decoded {
        has_zero_word: true,
        ..decoded
    };
    let factors = vec![
        Poly::from_exponents(&[17, 3, 0]).unwrap(),
        Poly::from_exponents(&[23, 5, 0]).unwrap(),
    ];
    let lines = answer_lines(&decoded, &factors, PairMode::Reference).unwrap();
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_solve_irreducible_with_zero_word() {
    // x + 1 неприводим: остаётся только пара (1, value)
    let lines = seeded(1).solve("32\n00000003 00000000\n").unwrap();
    assert_eq!(lines, vec!["00000001 00000003", "00000003 00000001"]);

    // x^63 + x + 1 при S = 64: слова 2 и 3 нулевые
    let lines = seeded(1)
        .solve("64\n00000003 80000000 00000000 00000000\n")
        .unwrap();
    assert_eq!(
        lines,
        vec![
            "00000001 00000000 00000003 80000000",
            "00000003 80000000 00000001 00000000",
        ]
    );
}

#[test]
fn test_solve_irreducible_without_zero_word() {
    // x^63 + x + 1 при S = 32: оба слова ненулевые, строить нечего
    let err = seeded(1).solve("32\n00000003 80000000\n").unwrap_err();
    assert!(matches!(err, FactorError::UnexpectedFactorCount(1)));
}

#[test]
fn test_solve_reference_needs_two_factors() {
    // x^2 (x + 1): три множителя
    let err = seeded(4).solve("32\n0000000c 00000000\n").unwrap_err();
    assert!(matches!(err, FactorError::UnexpectedFactorCount(3)));

    let err = seeded(4).solve("32\n00000001 00000000\n").unwrap_err();
    assert!(matches!(err, FactorError::UnexpectedFactorCount(0)));

    let err = seeded(4).solve("32\n00000000 00000000\n").unwrap_err();
    assert!(matches!(err, FactorError::ZeroPolynomial));
}

#[test]
fn test_solve_exhaustive_enumerates_divisors() {
    let config = SolverConfig::default()
        .with_seed(5)
        .with_pair_mode(PairMode::Exhaustive);
    let lines = Solver::new(config)
        .unwrap()
        .solve("32\n0000000c 00000000\n")
        .unwrap();
    assert_eq!(
        lines,
        vec![
            "00000001 0000000c",
            "00000002 00000006",
            "00000003 00000004",
            "00000004 00000003",
            "00000006 00000002",
            "0000000c 00000001",
        ]
    );
}

#[test]
fn test_exhaustive_drops_wide_splits() {
    // (x^17 + x^3 + 1)(x^23 + x^5 + 1): пары (1, f) и (f, 1) не помещаются в 32 бита
    let config = SolverConfig::default()
        .with_seed(6)
        .with_pair_mode(PairMode::Exhaustive);
    let lines = Solver::new(config)
        .unwrap()
        .solve("32\n04c20129 00000100\n")
        .unwrap();
    assert_eq!(lines, vec!["00020009 00800021", "00800021 00020009"]);
}

#[test]
fn test_solve_retries_with_new_seed() {
    // одна попытка расщепления на блок: успех приходит за счёт повторов
    let config = SolverConfig::default()
        .with_seed(7)
        .with_max_split_trials(1)
        .with_max_attempts(64);
    let solver = Solver::new(config).unwrap();
    let lines = solver.solve("32\n00000006 00000000\n").unwrap();
    assert_eq!(
        lines,
        vec![
            "00000001 00000006",
            "00000002 00000003",
            "00000003 00000002",
            "00000006 00000001",
        ]
    );
}

#[test]
fn test_solver_rejects_invalid_config() {
    assert!(matches!(
        Solver::new(SolverConfig::default().with_max_attempts(0)),
        Err(FactorError::InvalidConfig(_))
    ));
}

#[test]
fn test_solve_is_deterministic_for_a_seed() {
    let input = "64\n80124009 00000004 00000000 00000000\n";
    assert_eq!(seeded(9).solve(input).unwrap(), seeded(9).solve(input).unwrap());
}
