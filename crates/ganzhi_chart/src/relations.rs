//! Pairwise branch interactions over an active branch set.
//!
//! Interaction kinds are scanned in table order and every kind a branch
//! takes part in is reported, not just the first match. Primary kinds
//! (clash, punished-by, triad, six-combine, hidden-combine) and secondary
//! kinds (punish, assembly, harm, break) go to separate report sections.

use ganzhi_base::{ALL_INTERACTIONS, Branch, InteractionKind, partners};

use crate::context::{ALL_POSITIONS, PillarContext, Position};

/// One interaction seen from a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
    pub kind: InteractionKind,
    pub partner: Branch,
}

/// Interactions between `branch` and the branches in `others`.
///
/// Partners are listed once per kind, in table order, whatever their
/// multiplicity in `others`. Kinds in `skip` are ignored.
pub fn relations_against(
    branch: Branch,
    others: &[Branch],
    skip: &[InteractionKind],
) -> Vec<Relation> {
    ALL_INTERACTIONS
        .iter()
        .filter(|kind| !skip.contains(kind))
        .flat_map(|&kind| {
            partners(branch, kind)
                .iter()
                .filter(|p| others.contains(p))
                .map(move |&partner| Relation { kind, partner })
        })
        .collect()
}

/// Interactions of the branch at `index` with every other active branch.
pub fn relations_at(active: &[Branch], index: usize) -> Vec<Relation> {
    let others: Vec<Branch> = active
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, &b)| b)
        .collect();
    relations_against(active[index], &others, &[])
}

/// Render relations grouped by kind: `Clash 午; Six-Combine 丑`.
pub fn describe(relations: &[Relation]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for kind in ALL_INTERACTIONS {
        let partners: String = relations
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.partner.glyph())
            .collect();
        if !partners.is_empty() {
            parts.push(format!("{} {partners}", kind.name()));
        }
    }
    parts.join("; ")
}

/// Interactions of the four natal branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipTable {
    branches: [Branch; 4],
    rows: [Vec<Relation>; 4],
}

impl RelationshipTable {
    pub fn analyze(ctx: &PillarContext) -> Self {
        let branches = ctx.branches();
        let rows = ALL_POSITIONS.map(|pos| relations_at(&branches, pos.index()));
        Self { branches, rows }
    }

    /// Every relation of the branch at `position`.
    pub fn all(&self, position: Position) -> &[Relation] {
        &self.rows[position.index()]
    }

    pub fn primary(&self, position: Position) -> Vec<Relation> {
        self.filtered(position, true)
    }

    pub fn secondary(&self, position: Position) -> Vec<Relation> {
        self.filtered(position, false)
    }

    fn filtered(&self, position: Position, primary: bool) -> Vec<Relation> {
        self.all(position)
            .iter()
            .copied()
            .filter(|r| r.kind.is_primary() == primary)
            .collect()
    }

    /// Whether the branch at `position` has a `kind` relation with `partner`.
    pub fn has(&self, position: Position, kind: InteractionKind, partner: Branch) -> bool {
        self.all(position)
            .iter()
            .any(|r| r.kind == kind && r.partner == partner)
    }

    pub fn primary_lines(&self) -> Vec<String> {
        self.lines(true)
    }

    pub fn secondary_lines(&self) -> Vec<String> {
        self.lines(false)
    }

    fn lines(&self, primary: bool) -> Vec<String> {
        ALL_POSITIONS
            .iter()
            .map(|&pos| {
                let text = describe(&self.filtered(pos, primary));
                if text.is_empty() {
                    format!("{}: -", self.branches[pos.index()])
                } else {
                    format!("{}: {text}", self.branches[pos.index()])
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::Sex;

    fn table(glyphs: [&str; 4]) -> RelationshipTable {
        RelationshipTable::analyze(&PillarContext::from_glyphs(Sex::Male, glyphs).unwrap())
    }

    #[test]
    fn clash_reported_both_ways() {
        let t = table(["甲子", "丙寅", "丙午", "庚申"]);
        assert!(t.has(Position::Year, InteractionKind::Clash, Branch::Wu));
        assert!(t.has(Position::Day, InteractionKind::Clash, Branch::Zi));
        assert!(t.has(Position::Month, InteractionKind::Clash, Branch::Shen));
        assert!(t.has(Position::Hour, InteractionKind::Clash, Branch::Yin));
    }

    #[test]
    fn all_kinds_reported_not_first_match() {
        // 子 and 丑 six-combine; 子 and 卯 punish.
        let t = table(["甲子", "乙丑", "丁卯", "庚午"]);
        let kinds: Vec<_> = t.all(Position::Year).iter().map(|r| r.kind).collect();
        assert!(kinds.contains(&InteractionKind::SixCombine));
        assert!(kinds.contains(&InteractionKind::Clash));
        assert!(kinds.len() >= 3);
    }

    #[test]
    fn primary_and_secondary_are_disjoint() {
        let t = table(["甲子", "乙未", "丙午", "辛卯"]);
        for pos in ALL_POSITIONS {
            for r in t.primary(pos) {
                assert!(r.kind.is_primary());
            }
            for r in t.secondary(pos) {
                assert!(!r.kind.is_primary());
            }
            assert_eq!(t.primary(pos).len() + t.secondary(pos).len(), t.all(pos).len());
        }
    }

    #[test]
    fn self_punish_needs_a_second_copy() {
        let lone = relations_at(&[Branch::Chen, Branch::Zi], 0);
        assert!(lone.iter().all(|r| r.partner != Branch::Chen));
        let pair = relations_at(&[Branch::Chen, Branch::Chen], 0);
        assert!(pair.iter().any(|r| r.partner == Branch::Chen));
    }

    #[test]
    fn describe_groups_by_kind() {
        let rels = relations_against(Branch::Zi, &[Branch::Wu, Branch::Chou], &[]);
        let text = describe(&rels);
        assert!(text.starts_with("Clash 午"));
        assert!(text.contains("Six-Combine 丑"));
    }

    #[test]
    fn skipped_kinds_are_ignored() {
        let rels = relations_against(Branch::Zi, &[Branch::You], &[InteractionKind::Break]);
        assert!(rels.iter().all(|r| r.kind != InteractionKind::Break));
    }
}
