//! Property tests for drawing collection and registration.

use odp_writer::odf::odp::{DrawingRegistry, collect_drawings};
use odp_writer::presentation::{Drawing, Group, Presentation, RichText, Shape, Table};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Leaf {
    Image(usize),
    Table,
    Text,
    /// A group inside a group, holding an image that must never be collected
    Nested,
}

#[derive(Debug, Clone)]
enum Top {
    Image(usize),
    Table,
    Text,
    Group(Vec<Leaf>),
}

fn leaf() -> impl Strategy<Value = Leaf> {
    prop_oneof![
        (0..4usize).prop_map(Leaf::Image),
        Just(Leaf::Table),
        Just(Leaf::Text),
        Just(Leaf::Nested),
    ]
}

fn top() -> impl Strategy<Value = Top> {
    prop_oneof![
        (0..4usize).prop_map(Top::Image),
        Just(Top::Table),
        Just(Top::Text),
        prop::collection::vec(leaf(), 0..5).prop_map(Top::Group),
    ]
}

fn image(name: &str) -> Arc<Drawing> {
    Arc::new(Drawing::from_data_uri(name, "data:image/png;base64,iVBORw0KGgo=").unwrap())
}

struct Built {
    presentation: Presentation,
    expected: Vec<Arc<Drawing>>,
    hidden: Vec<Arc<Drawing>>,
}

/// Build a presentation from a layout, picking shared drawings from `pool`.
fn build(slides: &[Vec<Top>], pool: &[Arc<Drawing>]) -> Built {
    let mut presentation = Presentation::new();
    let mut expected = Vec::new();
    let mut hidden = Vec::new();

    for shapes in slides {
        let slide = presentation.add_slide();
        for shape in shapes {
            match shape {
                Top::Image(i) => {
                    expected.push(pool[*i].clone());
                    slide.add_shape(pool[*i].clone());
                },
                Top::Table => {
                    slide.add_shape(Table::new(vec![vec!["x".into()]]));
                },
                Top::Text => {
                    slide.add_shape(RichText::new("t"));
                },
                Top::Group(leaves) => {
                    let mut group = Group::new();
                    for leaf in leaves {
                        let child: Shape = match leaf {
                            Leaf::Image(i) => {
                                expected.push(pool[*i].clone());
                                pool[*i].clone().into()
                            },
                            Leaf::Table => Table::default().into(),
                            Leaf::Text => RichText::new("t").into(),
                            Leaf::Nested => {
                                let deep = image("deep");
                                hidden.push(deep.clone());
                                Group::new().with_shape(deep.into()).into()
                            },
                        };
                        group = group.with_shape(child);
                    }
                    slide.add_shape(group);
                },
            }
        }
    }

    Built {
        presentation,
        expected,
        hidden,
    }
}

proptest! {
    #[test]
    fn collection_follows_document_order(
        slides in prop::collection::vec(prop::collection::vec(top(), 0..6), 0..5)
    ) {
        let pool: Vec<_> = (0..4).map(|i| image(&format!("img{i}"))).collect();
        let built = build(&slides, &pool);
        let collected = collect_drawings(&built.presentation);

        prop_assert_eq!(collected.len(), built.expected.len());
        for (got, want) in collected.iter().zip(&built.expected) {
            prop_assert!(Arc::ptr_eq(got, want));
        }
        for deep in &built.hidden {
            prop_assert!(!collected.iter().any(|d| Arc::ptr_eq(d, deep)));
        }
    }

    #[test]
    fn registry_indices_are_a_bijection(
        slides in prop::collection::vec(prop::collection::vec(top(), 0..6), 0..5)
    ) {
        let pool: Vec<_> = (0..4).map(|i| image(&format!("img{i}"))).collect();
        let built = build(&slides, &pool);
        let registry = DrawingRegistry::build(collect_drawings(&built.presentation));

        let distinct: HashSet<*const Drawing> =
            built.expected.iter().map(Arc::as_ptr).collect();
        prop_assert_eq!(registry.len(), distinct.len());

        let mut seen = HashSet::new();
        for drawing in &built.expected {
            let index = registry.index_of(drawing).unwrap();
            prop_assert!(index < registry.len());
            prop_assert!(Arc::ptr_eq(registry.get(index).unwrap(), drawing));
            seen.insert(index);
        }
        prop_assert_eq!(seen.len(), registry.len());
        for deep in &built.hidden {
            prop_assert!(!registry.contains(deep));
        }
    }
}
