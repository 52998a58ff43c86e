use super::{Slots, TagMask, Xyhw};
use crate::config::MonitorRule;
use crate::layouts::Layout;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MFACT: f32 = 0.55;
pub const DEFAULT_COLFACT: [f32; 3] = [0.1, 0.6, 0.3];
pub const MIN_FACTOR: f32 = 0.1;
pub const MAX_FACTOR: f32 = 0.9;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(pub u32);

/// A display output with its own tag and layout state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Monitor {
    pub id: MonitorId,
    /// Output name as reported by the surface layer, e.g. `eDP-1`.
    pub name: String,
    /// Full output area.
    pub m: Xyhw,
    /// Area left for tiled clients once panels took their exclusive zones.
    pub w: Xyhw,
    pub tagset: Slots<TagMask>,
    pub layout: Slots<Layout>,
    pub mfact: f32,
    pub nmaster: usize,
    /// Weights of the left, master and right columns of the variable column layout.
    pub colfact: [f32; 3],
    pub nmastercols: usize,
    pub nrightcols: usize,
    pub scale: f32,
    pub enabled: bool,
}

impl Monitor {
    #[must_use]
    pub fn new(id: MonitorId, name: String, geometry: Xyhw) -> Self {
        Self {
            id,
            name,
            m: geometry,
            w: geometry,
            tagset: Slots::new(1),
            layout: Slots::new(Layout::default()),
            mfact: DEFAULT_MFACT,
            nmaster: 1,
            colfact: DEFAULT_COLFACT,
            nmastercols: 1,
            nrightcols: 1,
            scale: 1.0,
            enabled: true,
        }
    }

    /// Apply the first rule matching this output's name. A rule without a name matches all
    /// outputs.
    pub fn apply_rules(&mut self, rules: &[MonitorRule]) {
        let Some(rule) = rules.iter().find(|r| {
            r.name
                .as_deref()
                .map_or(true, |name| self.name.contains(name))
        }) else {
            return;
        };
        self.mfact = rule.mfact;
        self.nmaster = rule.nmaster;
        self.scale = rule.scale;
        self.layout = Slots::new(rule.layout);
    }

    pub fn active_tags(&self) -> TagMask {
        self.tagset.current()
    }

    pub fn active_layout(&self) -> Layout {
        self.layout.current()
    }

    /// Width of the output, used to decide if a left column is worth having.
    pub const fn output_width(&self) -> i32 {
        self.m.w
    }
}
