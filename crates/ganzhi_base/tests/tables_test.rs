//! Integration tests for the static knowledge tables.
//!
//! These check the cross-table invariants the engine relies on.

use ganzhi_base::{
    ALL_BRANCHES, ALL_DEITIES, ALL_INTERACTIONS, ALL_STEMS, Branch, Element, HIDDEN_WEIGHT_TOTAL,
    InteractionKind, LifeStage, Pillar, Stem, TEN_DEITIES, TRIADS, bracketed_between,
    branch_deity, interacts, life_stage, partners, stage_branch, stem_with_deity, ten_deity,
};

#[test]
fn ten_deity_bijection_for_every_day_master() {
    for dm in ALL_STEMS {
        let mut seen = [false; 10];
        for s in ALL_STEMS {
            let d = ten_deity(dm, s);
            assert!(!seen[d as usize], "{dm}: {} repeated", d.name());
            seen[d as usize] = true;
            assert_eq!(stem_with_deity(dm, d), s);
        }
        for d in ALL_DEITIES {
            assert_eq!(TEN_DEITIES.deity(dm, TEN_DEITIES.stem(dm, d)), d);
        }
    }
}

#[test]
fn hidden_weights_sum_to_total() {
    for b in ALL_BRANCHES {
        let hidden: Vec<_> = b.hidden_stems().collect();
        assert!(!hidden.is_empty());
        assert_eq!(hidden.iter().map(|h| h.weight).sum::<u32>(), HIDDEN_WEIGHT_TOTAL);
        assert_eq!(hidden[0].stem, b.main_stem());
        assert_eq!(hidden[0].stem.element(), b.element(), "{b}");
    }
}

#[test]
fn branch_deity_uses_main_stem() {
    for dm in ALL_STEMS {
        for b in ALL_BRANCHES {
            assert_eq!(branch_deity(dm, b), ten_deity(dm, b.main_stem()));
        }
    }
}

#[test]
fn jia_at_yin_is_established_root() {
    assert_eq!(life_stage(Stem::Jia, Branch::Yin), LifeStage::EstablishedRoot);
    assert_eq!(stage_branch(Stem::Jia, LifeStage::EstablishedRoot), Branch::Yin);
}

#[test]
fn life_stages_cover_all_branches_once() {
    for s in ALL_STEMS {
        let mut seen = [false; 12];
        for b in ALL_BRANCHES {
            let st = life_stage(s, b);
            assert!(!seen[st as usize]);
            seen[st as usize] = true;
            assert_eq!(stage_branch(s, st), b);
        }
    }
}

#[test]
fn interaction_partners_are_mutual() {
    for a in ALL_BRANCHES {
        for kind in ALL_INTERACTIONS {
            for &b in partners(a, kind) {
                assert!(
                    interacts(b, a, kind.mirror()),
                    "{a}-{b} {} not mirrored",
                    kind.name()
                );
            }
        }
    }
}

#[test]
fn clash_is_six_apart() {
    for b in ALL_BRANCHES {
        assert_eq!(partners(b, InteractionKind::Clash), &[b.offset(6)]);
    }
}

#[test]
fn triads_share_an_element() {
    for t in TRIADS {
        let el: Element = t.element_stem.element();
        // The middle member of each triad is the element's cardinal branch.
        assert_eq!(t.members[1].element(), el);
    }
}

#[test]
fn bracketed_branch_is_between() {
    assert_eq!(bracketed_between(Branch::Zi, Branch::Yin), Some(Branch::Chou));
    assert_eq!(bracketed_between(Branch::Xu, Branch::Zi), Some(Branch::Hai));
    assert_eq!(bracketed_between(Branch::Zi, Branch::Xu), Some(Branch::Hai));
    assert_eq!(bracketed_between(Branch::Zi, Branch::Mao), None);
}

#[test]
fn sexagenary_cycle_round_trip() {
    for i in 0..60 {
        let p = Pillar::from_index(i);
        assert_eq!(p.sexagenary_index() as i32, i);
        assert_eq!(Pillar::parse(&p.to_string()), Ok(p));
        assert_eq!(p.step(1).sexagenary_index() as i32, (i + 1) % 60);
    }
}
