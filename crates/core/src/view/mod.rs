use crate::{
    catalog::Catalog,
    model::{Circle, CircleId, Meter},
    resolver::{PatternResolver, ResolvedFoot},
};

/// Which screen the explorer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Overview of all circles.
    #[default]
    Hub,
    /// One circle, showing a single meter at a time.
    Circle { circle: CircleId, meter_index: usize },
}

/// Index after `index` in a ring of `len` items.
pub fn cycle_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Index before `index` in a ring of `len` items.
pub fn cycle_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}

/// Everything needed to draw the current view.
#[derive(Debug, Clone)]
pub enum Screen<'a> {
    Hub { catalog: &'a Catalog },
    Detail {
        circle: &'a Circle,
        meter: &'a Meter,
        index: usize,
        pattern: Vec<ResolvedFoot>,
    },
    /// A selected circle with no meters to show.
    Empty { circle: &'a Circle },
    /// The selected circle is not in the catalog. The only way out is back to
    /// the hub.
    Missing { circle: CircleId },
}

/// Owns the view state and applies user actions to it.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: ViewState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn select_circle(&mut self, circle: CircleId) {
        tracing::debug!(%circle, "opening circle");
        self.state = ViewState::Circle {
            circle,
            meter_index: 0,
        };
    }

    pub fn back_to_hub(&mut self) {
        self.state = ViewState::Hub;
    }

    pub fn next_meter(&mut self, catalog: &Catalog) {
        self.step(catalog, cycle_next);
    }

    pub fn prev_meter(&mut self, catalog: &Catalog) {
        self.step(catalog, cycle_prev);
    }

    fn step(&mut self, catalog: &Catalog, advance: fn(usize, usize) -> usize) {
        if let ViewState::Circle {
            circle,
            meter_index,
        } = &mut self.state
        {
            let len = catalog.circle(*circle).map_or(0, Circle::meter_count);
            *meter_index = advance(*meter_index, len);
        }
    }

    /// Resolves the state against `catalog` into something drawable.
    pub fn screen<'a>(&self, catalog: &'a Catalog, resolver: &PatternResolver) -> Screen<'a> {
        match self.state {
            ViewState::Hub => Screen::Hub { catalog },
            ViewState::Circle {
                circle: id,
                meter_index,
            } => {
                let Some(circle) = catalog.circle(id) else {
                    tracing::warn!(circle = %id, "selected circle is not in the catalog");
                    return Screen::Missing { circle: id };
                };
                match circle.meter_at(meter_index) {
                    Some(meter) => Screen::Detail {
                        circle,
                        meter,
                        index: meter_index,
                        pattern: resolver.resolve_groups(catalog, meter, Some(circle)),
                    },
                    None => Screen::Empty { circle },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_wrap_in_both_directions() {
        assert_eq!(cycle_next(2, 3), 0);
        assert_eq!(cycle_prev(0, 3), 2);
        assert_eq!(cycle_next(0, 1), 0);
        assert_eq!(cycle_prev(0, 1), 0);
        assert_eq!(cycle_next(5, 0), 0);
        assert_eq!(cycle_prev(0, 0), 0);
    }

    #[test]
    fn navigation_wraps_for_every_circle() {
        let catalog = Catalog::builtin();
        for circle in catalog.circles() {
            let last = circle.meter_count() - 1;
            let mut nav = Navigator::new();
            nav.select_circle(circle.id);

            nav.prev_meter(&catalog);
            assert_eq!(
                nav.state(),
                ViewState::Circle {
                    circle: circle.id,
                    meter_index: last
                }
            );

            nav.next_meter(&catalog);
            assert_eq!(
                nav.state(),
                ViewState::Circle {
                    circle: circle.id,
                    meter_index: 0
                }
            );
        }
    }

    #[test]
    fn selecting_resets_meter_index() {
        let catalog = Catalog::builtin();
        let mut nav = Navigator::new();
        nav.select_circle(CircleId::Accordant);
        nav.next_meter(&catalog);
        nav.next_meter(&catalog);

        nav.select_circle(CircleId::Pure);
        assert_eq!(
            nav.state(),
            ViewState::Circle {
                circle: CircleId::Pure,
                meter_index: 0
            }
        );
    }

    #[test]
    fn hub_ignores_meter_navigation() {
        let catalog = Catalog::builtin();
        let mut nav = Navigator::new();
        nav.next_meter(&catalog);
        assert_eq!(nav.state(), ViewState::Hub);

        nav.select_circle(CircleId::Mixed);
        nav.back_to_hub();
        assert_eq!(nav.state(), ViewState::Hub);
    }

    #[test]
    fn detail_screen_carries_the_resolved_pattern() {
        let catalog = Catalog::builtin();
        let resolver = PatternResolver::default();
        let mut nav = Navigator::new();
        nav.select_circle(CircleId::Mixed);
        nav.next_meter(&catalog);

        match nav.screen(&catalog, &resolver) {
            Screen::Detail {
                meter,
                index,
                pattern,
                ..
            } => {
                assert_eq!(meter.id, "al-madid");
                assert_eq!(index, 1);
                assert_eq!(pattern.len(), 4);
            }
            other => panic!("expected detail screen, got {other:?}"),
        }
    }

    #[test]
    fn circle_without_meters_yields_empty_screen() {
        let mut circle = Catalog::builtin().circle(CircleId::Pure).unwrap().clone();
        circle.meters.clear();
        let catalog = Catalog::new(vec![circle]);
        let resolver = PatternResolver::default();
        let mut nav = Navigator::new();
        nav.select_circle(CircleId::Pure);
        nav.next_meter(&catalog);

        match nav.screen(&catalog, &resolver) {
            Screen::Empty { circle } => assert_eq!(circle.id, CircleId::Pure),
            other => panic!("expected empty screen, got {other:?}"),
        }
        assert_eq!(
            nav.state(),
            ViewState::Circle {
                circle: CircleId::Pure,
                meter_index: 0
            }
        );
    }

    #[test]
    fn missing_circle_yields_missing_screen() {
        let catalog = Catalog::new(Vec::new());
        let resolver = PatternResolver::default();
        let mut nav = Navigator::new();
        nav.select_circle(CircleId::Consonant);

        assert!(matches!(
            nav.screen(&catalog, &resolver),
            Screen::Missing {
                circle: CircleId::Consonant
            }
        ));

        nav.next_meter(&catalog);
        assert_eq!(
            nav.state(),
            ViewState::Circle {
                circle: CircleId::Consonant,
                meter_index: 0
            }
        );
    }
}
