//! Ten-Deity roles of every stem and branch relative to the Day Master.

use ganzhi_base::{
    ALL_STEMS, Branch, LifeStage, Stem, Symbol, TEN_DEITIES, TenDeity, branch_deity, life_stage,
};

use crate::context::{ALL_POSITIONS, PillarContext, Position};

/// Role lookup fixed to one Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenDeityMapper {
    day_master: Stem,
}

impl TenDeityMapper {
    pub const fn new(day_master: Stem) -> Self {
        Self { day_master }
    }

    pub const fn for_chart(ctx: &PillarContext) -> Self {
        Self::new(ctx.day_master())
    }

    pub const fn day_master(&self) -> Stem {
        self.day_master
    }

    /// Role of a stem.
    pub const fn stem(&self, stem: Stem) -> TenDeity {
        TEN_DEITIES.deity(self.day_master, stem)
    }

    /// Role of a branch, taken from its main hidden stem.
    pub const fn branch(&self, branch: Branch) -> TenDeity {
        branch_deity(self.day_master, branch)
    }

    /// Role of either kind of symbol.
    pub const fn symbol(&self, symbol: Symbol) -> TenDeity {
        match symbol {
            Symbol::Stem(s) => self.stem(s),
            Symbol::Branch(b) => self.branch(b),
        }
    }

    /// The stem that plays `deity` for this Day Master.
    pub const fn stem_for(&self, deity: TenDeity) -> Stem {
        TEN_DEITIES.stem(self.day_master, deity)
    }

    /// Life stage of the Day Master at a branch.
    pub const fn life_stage(&self, branch: Branch) -> LifeStage {
        life_stage(self.day_master, branch)
    }

    /// Natal stem roles; the Day pillar itself has none.
    pub fn stem_roles(&self, ctx: &PillarContext) -> [Option<TenDeity>; 4] {
        ALL_POSITIONS.map(|pos| match pos {
            Position::Day => None,
            _ => Some(self.stem(ctx.pillar(pos).stem())),
        })
    }

    /// Natal branch roles (main hidden stem).
    pub fn branch_roles(&self, ctx: &PillarContext) -> [TenDeity; 4] {
        ctx.branches().map(|b| self.branch(b))
    }

    /// Full forward table for this Day Master, in stem order.
    pub fn table(&self) -> [(Stem, TenDeity); 10] {
        ALL_STEMS.map(|s| (s, self.stem(s)))
    }
}

/// Display label for an optional role; the Day Master shows as `--`.
pub fn role_label(role: Option<TenDeity>) -> &'static str {
    role.map_or("--", TenDeity::name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{ALL_DEITIES, Sex};

    #[test]
    fn inverse_round_trips_for_every_day_master() {
        for dm in ALL_STEMS {
            let m = TenDeityMapper::new(dm);
            for d in ALL_DEITIES {
                assert_eq!(m.stem(m.stem_for(d)), d);
            }
            for (s, d) in m.table() {
                assert_eq!(m.stem_for(d), s);
            }
        }
    }

    #[test]
    fn day_pillar_has_no_stem_role() {
        let ctx = PillarContext::from_glyphs(Sex::Male, ["甲子", "丙寅", "甲辰", "庚午"]).unwrap();
        let m = TenDeityMapper::for_chart(&ctx);
        let roles = m.stem_roles(&ctx);
        assert_eq!(roles[0], Some(TenDeity::Parallel));
        assert_eq!(roles[1], Some(TenDeity::EatingGod));
        assert_eq!(roles[2], None);
        assert_eq!(roles[3], Some(TenDeity::SevenKillings));
        assert_eq!(role_label(roles[2]), "--");
    }

    #[test]
    fn branch_role_from_main_stem() {
        let m = TenDeityMapper::new(Stem::Jia);
        assert_eq!(m.branch(Branch::Yin), TenDeity::Parallel);
        assert_eq!(m.branch(Branch::Zi), TenDeity::DirectResource);
        assert_eq!(m.life_stage(Branch::Yin), LifeStage::EstablishedRoot);
    }
}
