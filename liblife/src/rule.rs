use strum::{Display, EnumIter};

/// Neighbor-count sets driving the transition. Values outside 0..=8 are
/// unreachable on a Moore neighborhood but deliberately not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub born: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn new(born: Vec<usize>, survive: Vec<usize>) -> Self {
        Self { born, survive }
    }

    pub fn apply(&self, alive: bool, live_neighbors: usize) -> bool {
        if alive {
            self.survive.contains(&live_neighbors)
        } else {
            self.born.contains(&live_neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Preset::Standard.rule()
    }
}

/// Catalogue from https://en.wikipedia.org/wiki/Life-like_cellular_automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Preset {
    #[default]
    Standard,

    #[strum(serialize = "High Life")]
    HighLife,

    #[strum(serialize = "Day and Night")]
    DayAndNight,

    #[strum(serialize = "Life without Death")]
    LifeWithoutDeath,

    Seeds,
}

impl Preset {
    pub fn rule(self) -> Rule {
        match self {
            Preset::Standard => Rule::new(vec![3], vec![2, 3]),
            Preset::HighLife => Rule::new(vec![3, 6], vec![2, 3]),
            Preset::DayAndNight => Rule::new(vec![3, 6, 7, 8], vec![3, 4, 6, 7, 8]),
            Preset::LifeWithoutDeath => Rule::new(vec![3], (0..=8).collect()),
            Preset::Seeds => Rule::new(vec![2], Vec::new()),
        }
    }
}
