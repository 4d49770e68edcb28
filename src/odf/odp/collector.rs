//! Collection of embeddable drawings.

use crate::presentation::{Drawing, Presentation, Shape};
use std::sync::Arc;

/// Gather every embeddable drawing of `presentation`, in slide order and then
/// shape order.
///
/// Groups are flattened exactly one level: the immediate children of a group
/// are inspected, but a group nested inside a group is not descended into.
/// Tables never count as drawings. The same drawing may appear more than once
/// if it is placed several times; deduplication is the registry's job.
pub fn collect_drawings(presentation: &Presentation) -> Vec<Arc<Drawing>> {
    let mut drawings = Vec::new();

    for slide in presentation.slides() {
        for shape in slide.shapes() {
            if let Some(drawing) = embeddable(shape) {
                drawings.push(Arc::clone(drawing));
            } else if let Some(group) = shape.as_group() {
                drawings.extend(group.shapes().iter().filter_map(embeddable).cloned());
            }
        }
    }

    drawings
}

fn embeddable(shape: &Shape) -> Option<&Arc<Drawing>> {
    if shape.is_table() {
        return None;
    }
    shape.as_drawing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{Chart, ChartKind, Group, RichText, Table};

    fn image(name: &str) -> Arc<Drawing> {
        Arc::new(Drawing::from_data_uri(name, "data:image/png;base64,iVBORw0KGgo=").unwrap())
    }

    #[test]
    fn test_empty_presentation() {
        assert!(collect_drawings(&Presentation::new()).is_empty());
    }

    #[test]
    fn test_two_slide_scenario() {
        let first = image("first");
        let second = image("second");

        let mut pres = Presentation::new();
        pres.add_slide()
            .add_shape(first.clone())
            .add_shape(Table::new(vec![vec!["x".into()]]));
        pres.add_slide().add_shape(
            Group::new()
                .with_shape(second.clone().into())
                .with_shape(Chart::new(ChartKind::Bar).into()),
        );

        let collected = collect_drawings(&pres);
        assert_eq!(collected.len(), 2);
        assert!(Arc::ptr_eq(&collected[0], &first));
        assert!(Arc::ptr_eq(&collected[1], &second));
    }

    #[test]
    fn test_nested_groups_are_not_descended() {
        let shallow = image("shallow");
        let deep = image("deep");

        let inner = Group::new().with_shape(deep.into());
        let outer = Group::new()
            .with_shape(inner.into())
            .with_shape(RichText::new("caption").into())
            .with_shape(shallow.clone().into());

        let mut pres = Presentation::new();
        pres.add_slide().add_shape(outer);

        let collected = collect_drawings(&pres);
        assert_eq!(collected.len(), 1);
        assert!(Arc::ptr_eq(&collected[0], &shallow));
    }

    #[test]
    fn test_repeated_drawing_is_listed_each_time() {
        let logo = image("logo");
        let mut pres = Presentation::new();
        pres.add_slide().add_shape(logo.clone());
        pres.add_slide().add_shape(logo.clone());

        let collected = collect_drawings(&pres);
        assert_eq!(collected.len(), 2);
        assert!(Arc::ptr_eq(&collected[0], &collected[1]));
    }
}
