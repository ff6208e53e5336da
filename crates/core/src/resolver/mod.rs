//! Turns a meter's offset and group sizes into its sequence of metrical feet.
//!
//! A meter is read off its circle by starting at `start_offset` and consuming
//! the atomic units cyclically, one group per foot. Each group is looked up in
//! a [`TafilaTable`], first in the circle's own namespace and then in the
//! shared one; groupings without a name fall back to a literal foot built
//! from the raw symbols. A small [`OverrideTable`] pins the feet of circles
//! whose data the generic reading does not describe correctly.

use std::collections::HashMap;

use crate::{
    catalog::Catalog,
    model::{Circle, CircleId, Meter, Tafila},
    ArudError, Result,
};

/// Sequence used when a meter's circle cannot be resolved.
pub const DEFAULT_SEQUENCE: [&str; 10] = [
    "0//", "0/", "0//", "0/", "0/", "0//", "0/", "0//", "0/", "0/",
];

/// Lookup namespace for foot names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Names valid for every circle. The mixed circle uses only these.
    Shared,
    /// Names specific to one circle, consulted before [`Namespace::Shared`].
    Circle(CircleId),
}

impl Namespace {
    pub fn for_circle(id: CircleId) -> Self {
        match id {
            CircleId::Mixed => Namespace::Shared,
            other => Namespace::Circle(other),
        }
    }
}

/// Known feet keyed by namespace and atomic-unit grouping.
#[derive(Debug, Clone, Default)]
pub struct TafilaTable {
    entries: HashMap<(Namespace, Vec<String>), Tafila>,
}

impl TafilaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: Namespace, units: &[&str], tafila: Tafila) {
        let key = units.iter().map(|unit| unit.to_string()).collect();
        self.entries.insert((namespace, key), tafila);
    }

    pub fn get<S: AsRef<str>>(&self, namespace: Namespace, units: &[S]) -> Option<&Tafila> {
        let key: Vec<String> = units.iter().map(|unit| unit.as_ref().to_string()).collect();
        self.entries.get(&(namespace, key))
    }

    /// Circle-specific name first, then the shared one.
    pub fn lookup<S: AsRef<str>>(&self, circle: CircleId, units: &[S]) -> Option<&Tafila> {
        let own = Namespace::for_circle(circle);
        self.get(own, units).or_else(|| {
            if own == Namespace::Shared {
                None
            } else {
                self.get(Namespace::Shared, units)
            }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names for every grouping that occurs in the built-in circles.
    pub fn builtin() -> Self {
        use Namespace::{Circle as C, Shared};

        let mut table = Self::new();
        let mut add = |ns, units: &[&str], unmerged: &str, merged: &str| {
            table.insert(ns, units, Tafila::new(unmerged, merged));
        };

        add(Shared, &["0//", "0/"], "فعو لن", "فعولن");
        add(Shared, &["0//", "0/", "0/"], "مفا عي لن", "مفاعيلن");
        add(Shared, &["0/", "0//", "0/"], "فا علا تن", "فاعلاتن");
        add(Shared, &["0/", "0//"], "فا علن", "فاعلن");
        add(Shared, &["0/", "0/", "0//"], "مس تف علن", "مستفعلن");
        add(Shared, &["0/"], "لن", "لن");

        add(C(CircleId::Pure), &["0///", "0//"], "مت فا علن", "متفاعلن");
        add(C(CircleId::Pure), &["0//", "0///"], "مفا عل تن", "مفاعلتن");

        add(C(CircleId::Contracted), &["0//", "0/", "0/"], "مَـفا عِـي لُـن", "مفاعيلن");
        add(C(CircleId::Contracted), &["0/", "0//", "0/"], "فا عِلا تُن", "فاعلاتن");

        add(C(CircleId::Accordant), &["0/", "0//", "0//"], "مف عو لات", "مفعولات");
        add(C(CircleId::Accordant), &["0//", "0/", "0/"], "مف تع لن", "مفتعلن");
        add(C(CircleId::Accordant), &["0/", "0//", "0/"], "مفا عي ل", "مفاعيل");
        add(C(CircleId::Accordant), &["0//", "0/"], "مس تف ع", "مستفع");
        add(C(CircleId::Accordant), &["0//", "0//", "0/"], "مس تف عل ن", "مستفعلن");

        add(C(CircleId::Consonant), &["0/", "0//"], "فَا عِلُن", "فَاعِلُن");
        add(C(CircleId::Consonant), &["0//", "0/"], "فَعُو لُن", "فَعُولُن");

        table
    }
}

/// Fixed feet for every meter of one circle.
#[derive(Debug, Clone)]
pub struct CircleOverride {
    /// How many times the meter's foot is repeated.
    pub repetitions: usize,
    /// Meter id to foot.
    pub feet: HashMap<String, Tafila>,
    /// Reported for meters of the circle missing from `feet`.
    pub unknown: Tafila,
}

/// Data patches: circles whose meters report fixed feet instead of the
/// generic reading of their group sizes.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    circles: HashMap<CircleId, CircleOverride>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, circle: CircleId, entry: CircleOverride) {
        self.circles.insert(circle, entry);
    }

    pub fn contains(&self, circle: CircleId) -> bool {
        self.circles.contains_key(&circle)
    }

    /// Fixed feet for `meter`, or `None` when its circle is not patched.
    pub fn feet_for(&self, meter: &Meter) -> Option<Vec<Tafila>> {
        let entry = self.circles.get(&meter.circle_id)?;
        let foot = entry.feet.get(&meter.id).unwrap_or(&entry.unknown);
        Some(vec![foot.clone(); entry.repetitions])
    }

    /// The contracted circle's sequence does not yield its three uniform
    /// meters, so each reports its foot three times.
    pub fn builtin() -> Self {
        let feet = HashMap::from([
            ("al-hazaj".to_string(), Tafila::new("مَـفا عِـي لُـن", "مفاعيلن")),
            ("al-rajaz".to_string(), Tafila::new("مُس تَف عِلُن", "مستفعلن")),
            ("al-ramal".to_string(), Tafila::new("فا عِلا تُن", "فاعلاتن")),
        ]);

        let mut table = Self::new();
        table.insert(
            CircleId::Contracted,
            CircleOverride {
                repetitions: 3,
                feet,
                unknown: Tafila::new("unknown", "unknown"),
            },
        );
        table
    }
}

/// A run of consecutive atomic units taken from a circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitGroup {
    /// Index of the first unit in the atomic sequence.
    pub start: usize,
    pub units: Vec<String>,
}

/// A foot together with the units it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFoot {
    pub tafila: Tafila,
    pub group: UnitGroup,
}

/// Splits a cyclic sequence into consecutive groups starting at `offset`.
///
/// Indices wrap modulo the sequence length, so any offset or group size is
/// accepted. An empty sequence yields empty groups.
pub fn slice_groups<S: AsRef<str>>(sequence: &[S], offset: usize, sizes: &[usize]) -> Vec<UnitGroup> {
    if sequence.is_empty() {
        return sizes
            .iter()
            .map(|_| UnitGroup {
                start: 0,
                units: Vec::new(),
            })
            .collect();
    }

    let len = sequence.len();
    let mut cursor = offset % len;
    let mut groups = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let units = (0..size)
            .map(|i| sequence[(cursor + i) % len].as_ref().to_string())
            .collect();
        groups.push(UnitGroup {
            start: cursor,
            units,
        });
        cursor = (cursor + size % len) % len;
    }
    groups
}

/// Resolves meters into feet against an injected [`Catalog`].
#[derive(Debug, Clone)]
pub struct PatternResolver {
    table: TafilaTable,
    overrides: OverrideTable,
}

impl Default for PatternResolver {
    fn default() -> Self {
        Self::new(TafilaTable::builtin(), OverrideTable::builtin())
    }
}

impl PatternResolver {
    pub fn new(table: TafilaTable, overrides: OverrideTable) -> Self {
        Self { table, overrides }
    }

    pub fn table(&self) -> &TafilaTable {
        &self.table
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// The atomic sequence a meter is read from: the given circle's, else the
    /// catalog's circle for the meter, else [`DEFAULT_SEQUENCE`].
    pub fn atomic_sequence<'a>(
        &self,
        catalog: &'a Catalog,
        meter: &Meter,
        circle: Option<&'a Circle>,
    ) -> Vec<&'a str> {
        let sequence = circle
            .or_else(|| catalog.circle(meter.circle_id))
            .map(|circle| circle.atomic_sequence.as_slice())
            .filter(|sequence| !sequence.is_empty());

        match sequence {
            Some(sequence) => sequence.iter().map(String::as_str).collect(),
            None => {
                tracing::debug!(meter = %meter.id, "falling back to the default atomic sequence");
                DEFAULT_SEQUENCE.to_vec()
            }
        }
    }

    /// Feet of `meter`, one per group size (or per fixed repetition for
    /// patched circles), in order.
    pub fn resolve(&self, catalog: &Catalog, meter: &Meter, circle: Option<&Circle>) -> Vec<Tafila> {
        self.resolve_groups(catalog, meter, circle)
            .into_iter()
            .map(|foot| foot.tafila)
            .collect()
    }

    pub fn resolve_by_id(&self, catalog: &Catalog, meter_id: &str) -> Result<Vec<Tafila>> {
        let found = catalog
            .meter(meter_id)
            .ok_or_else(|| ArudError::UnknownMeter(meter_id.to_string()))?;
        Ok(self.resolve(catalog, found.meter, Some(found.circle)))
    }

    /// Like [`PatternResolver::resolve`], keeping the units behind each foot.
    pub fn resolve_groups(
        &self,
        catalog: &Catalog,
        meter: &Meter,
        circle: Option<&Circle>,
    ) -> Vec<ResolvedFoot> {
        let sequence = self.atomic_sequence(catalog, meter, circle);
        let groups = slice_groups(&sequence, meter.start_offset, &meter.parsing_instructions);

        if let Some(fixed) = self.overrides.feet_for(meter) {
            return fixed
                .into_iter()
                .enumerate()
                .map(|(index, tafila)| ResolvedFoot {
                    tafila,
                    group: groups.get(index).cloned().unwrap_or(UnitGroup {
                        start: 0,
                        units: Vec::new(),
                    }),
                })
                .collect();
        }

        groups
            .into_iter()
            .map(|group| {
                let tafila = match self.table.lookup(meter.circle_id, &group.units) {
                    Some(known) => known.clone(),
                    None => {
                        tracing::debug!(
                            meter = %meter.id,
                            units = ?group.units,
                            "no foot name for grouping"
                        );
                        Tafila::literal(&group.units)
                    }
                };
                ResolvedFoot { tafila, group }
            })
            .collect()
    }
}
