use ratatui::{buffer::Buffer, layout::Rect};

use super::action::Action;
use crate::config::DisplayConfig;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component:
/// - Has Props (input data, like React props)
/// - Has State (internal state, like useState)
/// - Renders to an Element tree (virtual DOM)
pub trait Component {
    /// Props type for this component
    type Props;

    /// Local state type (if any)
    type State: Default;

    /// Render component given props and state (pure function)
    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (day detail)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

/// Layout for container elements
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
}

/// Side effects requested by the reducer, executed by the runtime
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Queue a follow-up action
    Action(Action),
    /// Reset the content viewport to its first line
    ScrollToTop,
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestWidget;

    impl ElementWidget for TestWidget {
        fn render(&self, _area: Rect, _buf: &mut Buffer, _config: &DisplayConfig) {}

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_element_widget_default_preferred_height() {
        assert_eq!(TestWidget.preferred_height(), None);
    }

    #[test]
    fn test_box_element_widget_clone() {
        let widget: Box<dyn ElementWidget> = Box::new(TestWidget);
        let _cloned = widget.clone();
    }

    #[test]
    fn test_vertical_helper() {
        let element = vertical(
            [Constraint::Length(2), Constraint::Min(0)],
            vec![Element::None, Element::None],
        );

        match element {
            Element::Container { children, layout } => {
                assert_eq!(children.len(), 2);
                assert_eq!(
                    layout,
                    ContainerLayout::Vertical(vec![Constraint::Length(2), Constraint::Min(0)])
                );
            }
            _ => panic!("Expected Container element"),
        }
    }

    #[test]
    fn test_horizontal_helper() {
        let element = horizontal([Constraint::Percentage(50)], vec![Element::None]);
        assert!(matches!(
            element,
            Element::Container {
                layout: ContainerLayout::Horizontal(_),
                ..
            }
        ));
    }
}
