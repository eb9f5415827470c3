#![forbid(unsafe_code)]

//! Geometry audits over solved layouts.
//!
//! A renderer drawing a snapshot in pre-order relies on three things: siblings
//! do not overlap, children stay inside their parent's padded interior, and
//! no extent is negative. [`audit`] reports every place one of these fails. Minimum sizes
//! are advisory and only produce warnings.

use lac_layout::{Container, LayoutSnapshot, Rect};
use serde::Serialize;

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditIssue {
    SiblingOverlap {
        parent: String,
        first: String,
        second: String,
    },
    OutsideParent {
        parent: String,
        child: String,
    },
    NegativeSize {
        id: String,
        width: f64,
        height: f64,
    },
    /// Warning only: minimum sizes are stored but not enforced.
    BelowMinSize {
        id: String,
        width: f64,
        height: f64,
        min_width: f64,
        min_height: f64,
    },
}

impl AuditIssue {
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::BelowMinSize { .. })
    }
}

/// Findings for one layout, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn issues(&self) -> &[AuditIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(|i| !i.is_warning())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(|i| i.is_warning())
    }

    /// No errors; warnings are allowed.
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Add a warning for every container solved below its minimum size.
    pub fn check_min_sizes(&mut self, root: &Container) {
        root.for_each(&mut |c| {
            let size = c.size();
            let min = c.min_size();
            if size.width < min.width || size.height < min.height {
                self.issues.push(AuditIssue::BelowMinSize {
                    id: c.id().to_string(),
                    width: size.width,
                    height: size.height,
                    min_width: min.width,
                    min_height: min.height,
                });
            }
        });
    }
}

/// Check a solved snapshot. `tolerance` absorbs floating point drift.
pub fn audit(snapshot: &LayoutSnapshot, tolerance: f64) -> AuditReport {
    let mut report = AuditReport::default();

    for entry in snapshot.walk() {
        let rect = entry.rect;
        if rect.width < 0.0 || rect.height < 0.0 {
            report.issues.push(AuditIssue::NegativeSize {
                id: entry.id.to_string(),
                width: rect.width,
                height: rect.height,
            });
        }

        let interior = entry.node.interior();
        let children = entry.node.children();
        for (i, child) in children.iter().enumerate() {
            if !interior.contains_rect(&child.rect(), tolerance) {
                report.issues.push(AuditIssue::OutsideParent {
                    parent: entry.id.to_string(),
                    child: child.id().to_string(),
                });
            }
            for other in &children[i + 1..] {
                if overlap(&child.rect(), &other.rect(), tolerance) {
                    report.issues.push(AuditIssue::SiblingOverlap {
                        parent: entry.id.to_string(),
                        first: child.id().to_string(),
                        second: other.id().to_string(),
                    });
                }
            }
        }
    }

    report
}

fn overlap(a: &Rect, b: &Rect, tolerance: f64) -> bool {
    !a.is_empty() && !b.is_empty() && a.overlaps(b, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lac_layout::ContainerParams;

    fn solved(mut root: Container, width: f64, height: f64) -> Container {
        root.set_size(width, height);
        root.update().expect("update");
        root
    }

    #[test]
    fn well_formed_stack_is_clean() {
        let root = solved(
            Container::vstack("root")
                .with_child(Container::leaf("a"), 1)
                .with_child(Container::leaf("b"), 2),
            100.0,
            90.0,
        );
        let report = audit(&root.layout(), 1e-9);
        assert!(report.is_clean(), "{report:?}");
        assert!(report.issues().is_empty());
    }

    #[test]
    fn gap_wider_than_window_pushes_children_outside() {
        let mut root = Container::hstack("root")
            .with_child(Container::leaf("a"), 1)
            .with_child(Container::leaf("b"), 1);
        root.set_gap(50.0);
        let root = solved(root, 20.0, 10.0);

        let report = audit(&root.layout(), 1e-9);
        assert!(!report.is_clean());
        assert!(report.issues().contains(&AuditIssue::OutsideParent {
            parent: "root".into(),
            child: "b".into(),
        }));
    }

    #[test]
    fn child_in_the_padding_band_is_outside() {
        let mut a = Container::leaf("a");
        a.set_size(10.0, 10.0);
        let mut root = Container::leaf("root").with_child(a, 1);
        root.set_size(20.0, 20.0);
        root.set_padding(5.0).expect("padding");

        // Inside the 20x20 rectangle but not the (5, 5, 10, 10) interior.
        let report = audit(&root.layout(), 1e-9);
        assert_eq!(
            report.issues(),
            [AuditIssue::OutsideParent {
                parent: "root".into(),
                child: "a".into(),
            }]
        );
    }

    #[test]
    fn overlapping_siblings_are_reported() {
        // A leaf never solves its children, so positions set by hand stand.
        let mut a = Container::leaf("a");
        a.set_size(10.0, 10.0);
        let mut b = Container::leaf("b");
        b.set_position(5.0, 5.0);
        b.set_size(10.0, 10.0);
        let mut root = Container::leaf("root").with_child(a, 1).with_child(b, 1);
        root.set_size(20.0, 20.0);

        let report = audit(&root.layout(), 1e-9);
        assert_eq!(
            report.issues(),
            [AuditIssue::SiblingOverlap {
                parent: "root".into(),
                first: "a".into(),
                second: "b".into(),
            }]
        );
    }

    #[test]
    fn negative_extent_is_reported() {
        let mut root = Container::leaf("root");
        root.set_size(-1.0, 4.0);
        let report = audit(&root.layout(), 0.0);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn min_size_shortfall_is_only_a_warning() {
        let child = Container::leaf_with("small", &ContainerParams::new().min_size(50.0, 50.0));
        let root = solved(Container::vstack("root").with_child(child, 1), 40.0, 40.0);

        let mut report = audit(&root.layout(), 1e-9);
        report.check_min_sizes(&root);
        assert!(report.is_clean());
        assert_eq!(report.warnings().count(), 1);
    }
}
