//! Text-bearing tables: climate regulators, fortune periods, day officers,
//! life-palace descriptions and the classical-text corpora.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::error::SymbolError;
use crate::pillar::Pillar;
use crate::stem::Stem;

// ---------------------------------------------------------------------------
// Climate regulators (调候)
// ---------------------------------------------------------------------------

use Stem::{Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin};

static CLIMATE_REGULATORS: [[&[Stem]; 12]; 10] = [
    // 甲
    [
        &[Ding, Geng, Bing], // 子
        &[Ding, Geng, Bing], // 丑
        &[Bing, Gui], // 寅
        &[Geng, Bing, Ding, Wu, Ji], // 卯
        &[Geng, Ding, Ren], // 辰
        &[Gui, Geng, Ding], // 巳
        &[Gui, Geng, Ding], // 午
        &[Gui, Geng, Ding], // 未
        &[Geng, Ding, Ren], // 申
        &[Geng, Ding, Bing], // 酉
        &[Geng, Jia, Ding, Ren, Gui], // 戌
        &[Geng, Ding, Bing, Wu], // 亥
    ],
    // 乙
    [
        &[Bing], // 子
        &[Bing], // 丑
        &[Bing, Gui], // 寅
        &[Bing, Gui], // 卯
        &[Gui, Bing, Wu], // 辰
        &[Gui], // 巳
        &[Gui, Bing], // 午
        &[Gui, Bing], // 未
        &[Bing, Gui, Ji], // 申
        &[Gui, Bing, Ding], // 酉
        &[Gui, Xin], // 戌
        &[Bing, Wu], // 亥
    ],
    // 丙
    [
        &[Ren, Wu, Ji], // 子
        &[Ren, Jia], // 丑
        &[Ren, Geng], // 寅
        &[Ren, Ji], // 卯
        &[Ren, Jia], // 辰
        &[Ren, Gui, Geng], // 巳
        &[Ren, Geng], // 午
        &[Ren, Geng], // 未
        &[Ren, Wu], // 申
        &[Ren, Gui], // 酉
        &[Jia, Ren], // 戌
        &[Jia, Wu, Geng, Ren], // 亥
    ],
    // 丁
    [
        &[Jia, Geng], // 子
        &[Jia, Geng], // 丑
        &[Jia, Geng], // 寅
        &[Geng, Jia], // 卯
        &[Jia, Geng], // 辰
        &[Jia, Geng], // 巳
        &[Ren, Geng, Gui], // 午
        &[Jia, Ren, Geng], // 未
        &[Jia, Geng, Bing, Wu], // 申
        &[Jia, Geng, Bing, Wu], // 酉
        &[Jia, Geng, Wu], // 戌
        &[Jia, Geng], // 亥
    ],
    // 戊
    [
        &[Bing, Jia], // 子
        &[Bing, Jia], // 丑
        &[Bing, Jia, Gui], // 寅
        &[Bing, Jia, Gui], // 卯
        &[Jia, Bing, Gui], // 辰
        &[Jia, Bing, Gui], // 巳
        &[Ren, Jia, Bing], // 午
        &[Gui, Bing, Jia], // 未
        &[Bing, Gui, Jia], // 申
        &[Bing, Gui], // 酉
        &[Jia, Bing, Gui], // 戌
        &[Jia, Bing], // 亥
    ],
    // 己
    [
        &[Bing, Jia, Wu], // 子
        &[Bing, Jia, Wu], // 丑
        &[Bing, Geng, Jia], // 寅
        &[Jia, Gui, Bing], // 卯
        &[Bing, Gui, Jia], // 辰
        &[Gui, Bing], // 巳
        &[Gui, Bing], // 午
        &[Gui, Bing], // 未
        &[Bing, Gui], // 申
        &[Bing, Gui], // 酉
        &[Jia, Bing, Gui], // 戌
        &[Bing, Jia, Wu], // 亥
    ],
    // 庚
    [
        &[Ding, Jia, Bing], // 子
        &[Bing, Ding, Jia], // 丑
        &[Wu, Jia, Ren, Bing, Ding], // 寅
        &[Ding, Jia, Geng, Bing], // 卯
        &[Jia, Ding, Ren, Gui], // 辰
        &[Ren, Wu, Bing, Ding], // 巳
        &[Ren, Gui], // 午
        &[Ding, Jia], // 未
        &[Ding, Jia], // 申
        &[Ding, Jia, Bing], // 酉
        &[Jia, Ren], // 戌
        &[Ding, Bing], // 亥
    ],
    // 辛
    [
        &[Bing, Wu, Ren, Jia], // 子
        &[Bing, Ren, Wu, Ji], // 丑
        &[Ji, Ren, Geng], // 寅
        &[Ren, Jia], // 卯
        &[Ren, Jia], // 辰
        &[Ren, Jia, Gui], // 巳
        &[Ren, Ji, Gui], // 午
        &[Ren, Geng, Jia], // 未
        &[Ren, Jia, Wu], // 申
        &[Ren, Jia], // 酉
        &[Ren, Jia], // 戌
        &[Ren, Bing], // 亥
    ],
    // 壬
    [
        &[Wu, Bing], // 子
        &[Bing, Ding, Jia], // 丑
        &[Geng, Bing, Wu], // 寅
        &[Wu, Xin, Geng], // 卯
        &[Jia, Geng], // 辰
        &[Ren, Xin, Geng, Gui], // 巳
        &[Gui, Geng, Xin], // 午
        &[Xin, Jia], // 未
        &[Wu, Ding], // 申
        &[Jia, Geng], // 酉
        &[Jia, Bing], // 戌
        &[Wu, Bing, Geng], // 亥
    ],
    // 癸
    [
        &[Bing, Xin], // 子
        &[Bing, Ding], // 丑
        &[Xin, Bing], // 寅
        &[Geng, Xin], // 卯
        &[Bing, Xin, Jia], // 辰
        &[Xin], // 巳
        &[Geng, Xin, Ren, Gui], // 午
        &[Geng, Xin, Ren, Gui], // 未
        &[Ding], // 申
        &[Xin, Bing], // 酉
        &[Xin, Jia, Ren, Gui], // 戌
        &[Geng, Xin, Wu, Ding], // 亥
    ],
];

/// Regulating stems for a Day Master born in a month branch, most important first.
pub fn climate_regulators(day_master: Stem, month: Branch) -> &'static [Stem] {
    CLIMATE_REGULATORS[day_master.index() as usize][month.index() as usize]
}

// ---------------------------------------------------------------------------
// Fortune periods (金不换大运)
// ---------------------------------------------------------------------------

/// Compass quarter a luck period runs through, by the season of its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    East,
    South,
    West,
    North,
}

impl Quarter {
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::North => "North",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::East => "东",
            Self::South => "南",
            Self::West => "西",
            Self::North => "北",
        }
    }

    /// 寅卯辰 East, 巳午未 South, 申酉戌 West, 亥子丑 North.
    pub const fn of_branch(branch: Branch) -> Quarter {
        match (branch.index() + 10) % 12 / 3 {
            0 => Self::East,
            1 => Self::South,
            2 => Self::West,
            _ => Self::North,
        }
    }

    /// Quarter whose season the element rules. Earth has none.
    pub const fn of_element(element: Element) -> Option<Quarter> {
        match element {
            Element::Wood => Some(Self::East),
            Element::Fire => Some(Self::South),
            Element::Metal => Some(Self::West),
            Element::Water => Some(Self::North),
            Element::Earth => None,
        }
    }
}

const FORTUNE_NOTES: [&str; 10] = [
    "Tall timber wants metal to carve it and fire to warm it; a cold, wet run rots the root.",
    "Vines want sun and water in balance; heavy metal runs cut them down.",
    "The sun wants water to reflect its light; an earth-heavy run dims it.",
    "Lamp fire wants wood for fuel; strong water runs snuff it out.",
    "Mountain earth wants fire for warmth and water to moisten it; a dry run cracks it.",
    "Field soil wants fire and water in turn; heavy wood runs exhaust it.",
    "Raw metal wants fire to forge it; a run without fire leaves it blunt.",
    "Fine metal wants water to wash it; fire-heavy runs melt its shine.",
    "Rivers want earth for banks and metal for a source; unchecked water runs flood.",
    "Rain wants metal as a source and fire for warmth; an earth-heavy run muddies it.",
];

/// Quarters whose luck periods favour a Day Master born in `month`: the
/// seasons of its climate regulators, most important first.
pub fn fortune_quarters(day_master: Stem, month: Branch) -> Vec<Quarter> {
    let mut out = Vec::new();
    for stem in climate_regulators(day_master, month) {
        if let Some(q) = Quarter::of_element(stem.element()) {
            if !out.contains(&q) {
                out.push(q);
            }
        }
    }
    out
}

/// What a Day Master looks for in its luck periods.
pub const fn fortune_note(day_master: Stem) -> &'static str {
    FORTUNE_NOTES[day_master.index() as usize]
}

// ---------------------------------------------------------------------------
// Jian-Chu day officers
// ---------------------------------------------------------------------------

/// The twelve day officers (建除十二神).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfficer {
    Establish,
    Remove,
    Full,
    Balance,
    Stable,
    Initiate,
    Destruction,
    Danger,
    Success,
    Receive,
    Open,
    Close,
}

/// Officers in cycle order, starting at 建.
pub const ALL_DAY_OFFICERS: [DayOfficer; 12] = [
    DayOfficer::Establish,
    DayOfficer::Remove,
    DayOfficer::Full,
    DayOfficer::Balance,
    DayOfficer::Stable,
    DayOfficer::Initiate,
    DayOfficer::Destruction,
    DayOfficer::Danger,
    DayOfficer::Success,
    DayOfficer::Receive,
    DayOfficer::Open,
    DayOfficer::Close,
];

impl DayOfficer {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Establish => "Establish",
            Self::Remove => "Remove",
            Self::Full => "Full",
            Self::Balance => "Balance",
            Self::Stable => "Stable",
            Self::Initiate => "Initiate",
            Self::Destruction => "Destruction",
            Self::Danger => "Danger",
            Self::Success => "Success",
            Self::Receive => "Receive",
            Self::Open => "Open",
            Self::Close => "Close",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Establish => "建",
            Self::Remove => "除",
            Self::Full => "满",
            Self::Balance => "平",
            Self::Stable => "定",
            Self::Initiate => "执",
            Self::Destruction => "破",
            Self::Danger => "危",
            Self::Success => "成",
            Self::Receive => "收",
            Self::Open => "开",
            Self::Close => "闭",
        }
    }

    /// Officer ruling a day branch within a month: 建 falls on the month branch.
    pub const fn of_day(month: Branch, day: Branch) -> DayOfficer {
        let i = (day.index() as i32 - month.index() as i32).rem_euclid(12);
        ALL_DAY_OFFICERS[i as usize]
    }
}

// ---------------------------------------------------------------------------
// Life palace
// ---------------------------------------------------------------------------

const LIFE_PALACE_TEXTS: [&str; 12] = [
    "Sky-Noble palace: quick wit, restless mind, fortune through learning",
    "Sky-Stronghold palace: steady effort, late but durable success",
    "Sky-Power palace: ambition and command, must temper impatience",
    "Sky-Broken palace: early hardship, gains through skill and travel",
    "Sky-Treasury palace: frugal, protective of family wealth",
    "Sky-Literary palace: refined talent, recognition through writing",
    "Sky-Blessing palace: generous spirit, fortune through people",
    "Sky-Post palace: movement and change, career far from home",
    "Sky-Solitary palace: independent, gains through specialised craft",
    "Sky-Art palace: artistic gifts, strong aesthetic sense",
    "Sky-Longevity palace: calm temperament, long and settled life",
    "Sky-Longevity-Star palace: kindness rewarded, support from elders",
];

/// Life-palace branch: reversed branch order indexed by month + hour - 6.
pub const fn life_palace(month: Branch, hour: Branch) -> Branch {
    let i = (month.index() as i32 + hour.index() as i32 - 6).rem_euclid(12);
    Branch::from_index(11 - i)
}

/// Short description of a life-palace branch.
pub const fn life_palace_text(palace: Branch) -> &'static str {
    LIFE_PALACE_TEXTS[palace.index() as usize]
}

// ---------------------------------------------------------------------------
// Classical corpora
// ---------------------------------------------------------------------------

const MONTH_CORPUS: &str = "month";
const HOUR_CORPUS: &str = "hour";

const BUILTIN_MONTH: [(&str, &str); 6] = [
    (
        "甲寅",
        "Jia wood in the first spring month: cold lingers, Bing fire warms first, Gui water follows.",
    ),
    (
        "甲午",
        "Jia wood in midsummer: wood is parched, Gui water is needed before all else.",
    ),
    (
        "丙子",
        "Bing fire in midwinter: water is at its height, Ren and Wu must be balanced.",
    ),
    (
        "庚申",
        "Geng metal in its own season: strong and sharp, Ding fire forges it into a tool.",
    ),
    (
        "壬午",
        "Ren water in midsummer: the source is weak, Geng and Xin metal restore it.",
    ),
    (
        "癸亥",
        "Gui water in early winter: abundant water, Geng and Xin support, Wu earth dams.",
    ),
];

const BUILTIN_HOUR: [(&str, &str); 4] = [
    (
        "甲日丙寅",
        "Jia day, Bing-Yin hour: wood and fire illuminate each other, a clear and noble hour.",
    ),
    (
        "丙日甲午",
        "Bing day, Jia-Wu hour: fire at full strength, brilliant but needs water to regulate.",
    ),
    (
        "庚日丁亥",
        "Geng day, Ding-Hai hour: officer on a water seat, steady advancement.",
    ),
    (
        "癸日壬子",
        "Gui day, Ren-Zi hour: water overflows, seek earth to give it banks.",
    ),
];

/// Check a month-corpus key: a Day Master stem followed by a month branch.
pub fn parse_month_key(key: &str) -> Result<(Stem, Branch), SymbolError> {
    let malformed = || SymbolError::MalformedKey {
        corpus: MONTH_CORPUS,
        key: key.to_string(),
    };
    let mut chars = key.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(s), Some(b), None) => {
            let stem = Stem::from_char(s).map_err(|_| malformed())?;
            let branch = Branch::from_char(b).map_err(|_| malformed())?;
            Ok((stem, branch))
        }
        _ => Err(malformed()),
    }
}

/// Check an hour-corpus key: Day Master, the glyph 日, then the hour pillar.
pub fn parse_hour_key(key: &str) -> Result<(Stem, Pillar), SymbolError> {
    let malformed = || SymbolError::MalformedKey {
        corpus: HOUR_CORPUS,
        key: key.to_string(),
    };
    let chars: Vec<char> = key.chars().collect();
    let &[s, '日', hs, hb] = chars.as_slice() else {
        return Err(malformed());
    };
    let stem = Stem::from_char(s).map_err(|_| malformed())?;
    let hour = Stem::from_char(hs)
        .and_then(|hs| Pillar::new(hs, Branch::from_char(hb)?))
        .map_err(|_| malformed())?;
    Ok((stem, hour))
}

fn month_key(day_master: Stem, month: Branch) -> String {
    format!("{day_master}{month}")
}

fn hour_key(day_master: Stem, hour: Pillar) -> String {
    format!("{day_master}日{hour}")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CorpusFile {
    month: BTreeMap<String, String>,
    hour: BTreeMap<String, String>,
}

/// The two classical-text corpora: one keyed by Day Master + month branch,
/// one keyed by Day Master + hour pillar.
///
/// Immutable once built; share one instance across analyses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classics {
    month: BTreeMap<String, String>,
    hour: BTreeMap<String, String>,
}

impl Classics {
    /// Empty corpora. Every lookup returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in excerpts.
    pub fn builtin() -> Self {
        let month = BUILTIN_MONTH
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let hour = BUILTIN_HOUR
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { month, hour }
    }

    /// Parse a JSON corpus document `{"month": {...}, "hour": {...}}`.
    ///
    /// Every key is validated; the first malformed key aborts loading.
    pub fn from_json_str(json: &str) -> Result<Self, SymbolError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        for key in file.month.keys() {
            parse_month_key(key)?;
        }
        for key in file.hour.keys() {
            parse_hour_key(key)?;
        }
        Ok(Self {
            month: file.month,
            hour: file.hour,
        })
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merged(mut self, other: Classics) -> Self {
        self.month.extend(other.month);
        self.hour.extend(other.hour);
        self
    }

    pub fn month_entries(&self) -> usize {
        self.month.len()
    }

    pub fn hour_entries(&self) -> usize {
        self.hour.len()
    }

    /// Month-corpus text for a Day Master and month branch.
    pub fn month_text(&self, day_master: Stem, month: Branch) -> Option<&str> {
        self.month.get(&month_key(day_master, month)).map(String::as_str)
    }

    /// Hour-corpus text for a Day Master and hour pillar.
    pub fn hour_text(&self, day_master: Stem, hour: Pillar) -> Option<&str> {
        self.hour.get(&hour_key(day_master, hour)).map(String::as_str)
    }

    /// Raw-key month lookup. Malformed keys are errors, absent keys are `None`.
    pub fn lookup_month(&self, key: &str) -> Result<Option<&str>, SymbolError> {
        let (stem, branch) = parse_month_key(key)?;
        Ok(self.month_text(stem, branch))
    }

    /// Raw-key hour lookup. Malformed keys are errors, absent keys are `None`.
    pub fn lookup_hour(&self, key: &str) -> Result<Option<&str>, SymbolError> {
        let (stem, hour) = parse_hour_key(key)?;
        Ok(self.hour_text(stem, hour))
    }
}
