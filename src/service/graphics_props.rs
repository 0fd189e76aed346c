// SPDX-License-Identifier: MIT OR Apache-2.0

//! Props store extended with graphics value accessors.

use crate::domain::{Color, Dimension, Font, Point, PropKey, PropValue, Result};
use crate::ports::TypedProps;
use crate::service::Props;
use std::ops::{Deref, DerefMut};

/// A [`Props`] store that also reads colors, points, dimensions and fonts.
///
/// It shares the raw mapping and error rules of the plain store: a missing
/// key is `MissingKey`, a value of the wrong shape is `TypeMismatch` whose
/// source is the [`GraphicsParseError`](crate::domain::GraphicsParseError)
/// explaining what was wrong. All plain-store operations are reachable
/// through `Deref`.
///
/// # Examples
///
/// ```rust
/// use typedprops::prelude::*;
///
/// let mut props = GraphicsProps::new();
/// props.load_str("my color=100,20,250\nmy font=Dialog,BOLD,12\n").unwrap();
///
/// assert_eq!(props.get_color("my color").unwrap(), Color::new(100, 20, 250));
/// assert_eq!(props.get_font("my font").unwrap().size(), 12);
/// assert!(props.get_point("my color").unwrap_err().is_type_mismatch());
/// ```
#[derive(Debug, Default)]
pub struct GraphicsProps {
    props: Props,
}

impl GraphicsProps {
    /// Creates an empty graphics store with the default reader and parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store.
    pub fn from_props(props: Props) -> Self {
        GraphicsProps { props }
    }

    /// Returns the wrapped store.
    pub fn into_inner(self) -> Props {
        self.props
    }

    /// Returns the value for `key` as an RGB color (`r,g,b`, each `0..=255`).
    pub fn get_color(&self, key: &str) -> Result<Color> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as a point (`x,y`).
    pub fn get_point(&self, key: &str) -> Result<Point> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as a dimension (`width,height`).
    pub fn get_dimension(&self, key: &str) -> Result<Dimension> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as a font (`family,style,size`).
    pub fn get_font(&self, key: &str) -> Result<Font> {
        self.get_parsed(key)
    }
}

impl From<Props> for GraphicsProps {
    fn from(props: Props) -> Self {
        GraphicsProps::from_props(props)
    }
}

impl Deref for GraphicsProps {
    type Target = Props;

    fn deref(&self) -> &Props {
        &self.props
    }
}

impl DerefMut for GraphicsProps {
    fn deref_mut(&mut self) -> &mut Props {
        &mut self.props
    }
}

impl TypedProps for GraphicsProps {
    fn raw(&self, key: &str) -> Option<&PropValue> {
        self.props.raw(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&PropKey, &PropValue)> + '_> {
        self.props.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FontStyle, GraphicsParseError, PropsError};
    use std::error::Error as _;

    fn sample() -> GraphicsProps {
        let mut props = GraphicsProps::new();
        props
            .load_str(
                "my int=2\n\
                 my color=100,20,250\n\
                 my point=10,30\n\
                 my dimension=120,105\n\
                 my font=Dialog,BOLD,12\n",
            )
            .unwrap();
        props
    }

    #[test]
    fn test_get_color() {
        let props = sample();
        assert_eq!(props.get_color("my color").unwrap(), Color::new(100, 20, 250));
        assert!(props.get_color("my int").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_get_point() {
        let props = sample();
        assert_eq!(props.get_point("my point").unwrap(), Point::new(10, 30));
        assert!(props.get_point("my color").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_get_dimension() {
        let props = sample();
        assert_eq!(
            props.get_dimension("my dimension").unwrap(),
            Dimension::new(120, 105)
        );
        assert!(props.get_dimension("my color").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_get_font() {
        let props = sample();
        assert_eq!(
            props.get_font("my font").unwrap(),
            Font::new("Dialog", FontStyle::Bold, 12).unwrap()
        );
        assert!(props.get_font("my color").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_mismatch_carries_parse_error() {
        let props = sample();
        let err = props.get_color("my int").unwrap_err();
        let source = err.source().unwrap();
        assert_eq!(
            source.downcast_ref::<GraphicsParseError>(),
            Some(&GraphicsParseError::ComponentCount {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_missing_keys() {
        let props = sample();
        assert!(props.get_color("nothing").unwrap_err().is_missing_key());
        assert!(props.get_point("nothing").unwrap_err().is_missing_key());
        assert!(props.get_dimension("nothing").unwrap_err().is_missing_key());
        assert!(matches!(
            props.get_font("nothing"),
            Err(PropsError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_plain_accessors_still_work() {
        let mut props = sample();
        assert_eq!(props.get_int("my int").unwrap(), 2);
        assert_eq!(props.size(), 5);
        props.clear();
        assert_eq!(props.size(), 0);
    }

    #[test]
    fn test_wraps_existing_store() {
        let mut plain = Props::new();
        plain.load_str("my point=-4,8\n").unwrap();

        let props = GraphicsProps::from(plain);
        assert_eq!(props.get_point("my point").unwrap(), Point::new(-4, 8));
        assert_eq!(props.into_inner().size(), 1);
    }
}
