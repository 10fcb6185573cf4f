use npgen::{
    fcc_basis_sites, generate_nanoparticle, Atom, BuildConfig, LatticeSystem, NpgenError,
    OutputLabels, RadiusUnit, Shape, ShapeKind,
};
use std::fs;
use std::path::PathBuf;

/// Gold at a = 4.08 A is the reference scenario material.
fn gold_config(shape: ShapeKind, radius: &str, unit: &str, stem: &str) -> BuildConfig {
    BuildConfig {
        shape,
        radius: radius.to_string(),
        radius_unit: unit.to_string(),
        lattice_type: "FCC".to_string(),
        element: "Au".to_string(),
        atomic_radius: "1.44".to_string(),
        formal_charge: 0,
        lattice_constant: "4.08".to_string(),
        precision: 100,
        file_name: stem.to_string(),
        structure_name: "gold_test".to_string(),
        structure_index: "1".to_string(),
        debug_csv: false,
    }
}

fn stem(tag: &str) -> String {
    std::env::temp_dir()
        .join(format!("npgen_it_{tag}_{}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

struct MmcifAtoms {
    rows: Vec<Vec<String>>,
}

fn read_mmcif(path: &PathBuf) -> MmcifAtoms {
    let text = fs::read_to_string(path).expect("mmCIF output readable");
    let rows = text
        .lines()
        .filter(|l| l.starts_with("HETATM"))
        .map(|l| l.split_whitespace().map(str::to_string).collect())
        .collect();
    MmcifAtoms { rows }
}

#[test]
fn sphere_scenarios_match_exact_enumeration() {
    // (radius, unit, expected atoms): at a = 4.08 the occupied half-step
    // grid has shells at 2.885, 4.08, 4.997... A, so 0.3 nm holds the
    // 13-atom cuboctahedral cluster and 0.5 nm three more shells.
    let cases = [("0.3", "nm", 13u64), ("5", "A", 43), ("1.0", "nm", 249)];
    for (radius, unit, expected) in cases {
        let stem = stem(&format!("sphere_{radius}_{unit}"));
        let report =
            generate_nanoparticle(&gold_config(ShapeKind::Sphere, radius, unit, &stem)).unwrap();
        assert_eq!(report.atoms, expected, "sphere r={radius}{unit}");
        let parsed = read_mmcif(&report.output);
        assert_eq!(parsed.rows.len() as u64, expected);
        fs::remove_file(&report.output).unwrap();
    }
}

#[test]
fn cube_scenarios_match_exact_enumeration() {
    let stem5 = stem("cube5");
    let report =
        generate_nanoparticle(&gold_config(ShapeKind::Cube, "5", "A", &stem5)).unwrap();
    assert_eq!(report.atoms, 63);
    fs::remove_file(&report.output).unwrap();

    // side 0: the half-step grid still visits (0,0,0), which is occupied
    let stem0 = stem("cube0");
    let report = generate_nanoparticle(&gold_config(ShapeKind::Cube, "0", "A", &stem0)).unwrap();
    assert_eq!(report.atoms, 1);
    let parsed = read_mmcif(&report.output);
    assert_eq!(parsed.rows[0][4..7], ["0", "0", "0"]);
    fs::remove_file(&report.output).unwrap();
}

#[test]
fn sphere_count_is_strictly_below_cube_count_at_equal_radius() {
    let s = stem("ineq_sphere");
    let sphere =
        generate_nanoparticle(&gold_config(ShapeKind::Sphere, "5", "A", &s)).unwrap();
    let c = stem("ineq_cube");
    let cube = generate_nanoparticle(&gold_config(ShapeKind::Cube, "5", "A", &c)).unwrap();
    assert!(sphere.atoms < cube.atoms);
    fs::remove_file(&sphere.output).unwrap();
    fs::remove_file(&cube.output).unwrap();
}

#[test]
fn emitted_atoms_are_dense_ordered_and_consistent() {
    let stem_v = stem("verify");
    let mut config = gold_config(ShapeKind::Sphere, "5", "A", &stem_v);
    config.debug_csv = true;
    let report = generate_nanoparticle(&config).unwrap();
    let parsed = read_mmcif(&report.output);

    // indices dense 0..N-1 in file order; labels are element+index
    for (n, row) in parsed.rows.iter().enumerate() {
        assert_eq!(row[1], n.to_string());
        assert_eq!(row[2], "Au");
        assert_eq!(row[3], format!("Au{n}"));
        assert_eq!(row[7], "0", "formal charge");
        assert_eq!(row[8], "1", "occupancy");
        assert_eq!(row[9], "A", "chain");
        assert_eq!(row[10], "1.44", "radius column");
    }

    // every emitted cartesian is inside the shape and equals frac * a
    let basis: Vec<Atom> = fcc_basis_sites(100)
        .unwrap()
        .into_iter()
        .map(|site| Atom::new("Au", "1.44", 0, site, 100).unwrap())
        .collect();
    let shape = Shape::new(
        ShapeKind::Sphere,
        "5",
        RadiusUnit::Angstroms,
        LatticeSystem::Fcc,
        basis,
        "4.08",
        100,
        OutputLabels {
            file_name: stem("verify_probe"),
            structure_name: "probe".into(),
            structure_index: "1".into(),
        },
    )
    .unwrap();
    for row in &parsed.rows {
        let p = npgen::math::vector::Triple::parse(&row[4], &row[5], &row[6], 100).unwrap();
        assert!(shape.contains(&p).unwrap(), "emitted atom out of bounds");
    }

    // debug CSV: occupied rows appear in the same order as the mmCIF
    // atoms, and the cartesian columns agree
    let dbg_path = report.debug_output.clone().expect("debug stream requested");
    let dbg = fs::read_to_string(&dbg_path).unwrap();
    let mut lines = dbg.lines();
    assert_eq!(
        lines.next().unwrap(),
        "x_frac,y_frac,z_frac,x_cart,y_cart,z_cart,is_occupied"
    );
    let occupied: Vec<Vec<&str>> = lines
        .map(|l| l.split(',').collect::<Vec<_>>())
        .filter(|f| f[6] == "true")
        .collect();
    assert_eq!(occupied.len(), parsed.rows.len());
    for (row, dbg_row) in parsed.rows.iter().zip(&occupied) {
        assert_eq!(row[4], dbg_row[3]);
        assert_eq!(row[5], dbg_row[4]);
        assert_eq!(row[6], dbg_row[5]);
    }
    // cart = frac * a, checked in exact arithmetic
    let a = npgen::math::bignum::parse("4.08", 100).unwrap();
    for dbg_row in &occupied {
        let frac = npgen::math::vector::Triple::parse(dbg_row[0], dbg_row[1], dbg_row[2], 100)
            .unwrap();
        let cart = npgen::math::vector::Triple::parse(dbg_row[3], dbg_row[4], dbg_row[5], 100)
            .unwrap();
        assert_eq!(frac.scale(&a), cart);
    }

    fs::remove_file(&report.output).unwrap();
    fs::remove_file(&dbg_path).unwrap();
}

#[test]
fn rhombic_triacontahedron_count_is_deterministic_across_precisions() {
    let mut counts = Vec::new();
    for precision in [100usize, 140] {
        let stem_p = stem(&format!("rt_{precision}"));
        let mut config = gold_config(
            ShapeKind::RhombicTriacontahedron,
            "2.0",
            "nm",
            &stem_p,
        );
        config.precision = precision;
        let report = generate_nanoparticle(&config).unwrap();
        counts.push(report.atoms);
        fs::remove_file(&report.output).unwrap();
    }
    assert_eq!(counts[0], counts[1]);
    assert_eq!(counts[0], 1397);
}

#[test]
fn equivalent_builds_are_byte_identical() {
    let s1 = stem("repeat_a");
    let s2 = stem("repeat_b");
    let r1 = generate_nanoparticle(&gold_config(
        ShapeKind::TruncatedOctahedron {
            form: npgen::Form::Canonical,
        },
        "8",
        "A",
        &s1,
    ))
    .unwrap();
    let r2 = generate_nanoparticle(&gold_config(
        ShapeKind::TruncatedOctahedron {
            form: npgen::Form::Canonical,
        },
        "8",
        "A",
        &s2,
    ))
    .unwrap();
    let b1 = fs::read(&r1.output).unwrap();
    let b2 = fs::read(&r2.output).unwrap();
    assert_eq!(b1, b2);
    fs::remove_file(&r1.output).unwrap();
    fs::remove_file(&r2.output).unwrap();
}

#[test]
fn build_runs_at_most_once_per_shape() {
    let basis: Vec<Atom> = fcc_basis_sites(100)
        .unwrap()
        .into_iter()
        .map(|site| Atom::new("Au", "1.44", 0, site, 100).unwrap())
        .collect();
    let mut shape = Shape::new(
        ShapeKind::Cube,
        "0",
        RadiusUnit::Angstroms,
        LatticeSystem::Fcc,
        basis,
        "4.08",
        100,
        OutputLabels {
            file_name: stem("once"),
            structure_name: "once".into(),
            structure_index: "1".into(),
        },
    )
    .unwrap();
    let report = shape.build(false).unwrap();
    assert!(matches!(shape.build(false), Err(NpgenError::State(_))));
    fs::remove_file(&report.output).unwrap();
}

#[test]
fn icosahedron_build_fails_loudly() {
    let stem_i = stem("icosa");
    let err = generate_nanoparticle(&gold_config(ShapeKind::Icosahedron, "5", "A", &stem_i))
        .unwrap_err();
    assert!(format!("{err:#}").contains("not implemented"));
    // no output files appear, not even temporaries
    assert!(!PathBuf::from(format!("{stem_i}.mmcif")).exists());
    assert!(!PathBuf::from(format!("{stem_i}.mmcif.tmp")).exists());
}

#[test]
fn polyhedral_catalogue_builds_match_exact_counts() {
    // one small build per family exercises constants, tables and duals;
    // counts are from independent exact enumeration at 6 A, where the
    // nearest lattice point sits at least 0.02 A from every face plane
    let shapes: &[(&str, u64)] = &[
        ("tetrahedron", 1),
        ("truncated-triakis-tetrahedron", 31),
        ("snub-cuboctahedron:levo", 43),
        ("truncated-octahedron:biscribed", 55),
        ("pentagonal-hexecontahedron", 43),
        ("disdyakis-triacontahedron:biscribed", 43),
        ("bilunabirotunda", 15),
        ("elongated-pentagonal-dipyramid", 18),
    ];
    for &(name, expected) in shapes {
        let kind: ShapeKind = name.parse().unwrap();
        let stem_s = stem(&format!("smoke_{}", name.replace(':', "_")));
        let mut config = gold_config(kind, "6", "A", &stem_s);
        config.precision = 50;
        let report = generate_nanoparticle(&config).unwrap();
        assert_eq!(report.atoms, expected, "{name}");
        assert!(
            report.points_inside >= report.atoms,
            "{name}: more atoms than in-bounds points"
        );
        fs::remove_file(&report.output).unwrap();
    }
}
