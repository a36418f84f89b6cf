//! Dynamic 2d-tree over planar points.
//!
//! The tree is a binary search tree whose keys alternate between the x- and
//! y-coordinates of the stored points, level by level. Every node also carries
//! the rectangle its subtree is confined to; the rectangle is derived during
//! insertion by clipping the parent's rectangle at the parent's point along
//! the parent's splitting axis. Queries use those rectangles to prune whole
//! subtrees.
//!
//! No rebalancing is performed: inserting points in a sorted order (for
//! example along a diagonal) degrades the tree to a linked list and all
//! operations to linear time. Callers that control insertion order and care
//! about worst-case behavior should shuffle their input.

use std::collections::VecDeque;

use crate::error::{Error, check_point, check_rect};
use crate::geom::{Axis, Point, Rect};

/// Routing decision for one comparison step of a descent.
///
/// This is the single tie-break rule shared by insertion and membership: a
/// point equal to the node's point on both coordinates stays `Here`; a point
/// whose splitting coordinate is strictly below the node's goes `Left`;
/// everything else, including a point with an equal splitting coordinate but
/// a different other coordinate, goes `Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    Here,
    Left,
    Right,
}

pub(crate) fn place(node_point: Point, axis: Axis, p: Point) -> Placement {
    if p == node_point {
        Placement::Here
    } else if axis.coord(p) < axis.coord(node_point) {
        Placement::Left
    } else {
        Placement::Right
    }
}

/// One tree vertex: the stored point, the splitting axis at this level, the
/// rectangle the subtree is confined to, and up to two owned children.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) axis: Axis,
    pub(crate) rect: Rect,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    fn new(point: Point, axis: Axis, rect: Rect) -> Self {
        Self {
            point,
            axis,
            rect,
            left: None,
            right: None,
        }
    }

    /// Rectangle for a child attached on the lesser side: this node's
    /// rectangle clipped at this node's point along this node's axis.
    fn left_rect(&self) -> Rect {
        match self.axis {
            Axis::X => Rect::new(self.rect.xmin, self.rect.ymin, self.point.x, self.rect.ymax),
            Axis::Y => Rect::new(self.rect.xmin, self.rect.ymin, self.rect.xmax, self.point.y),
        }
    }

    /// Rectangle for a child attached on the greater-or-equal side.
    fn right_rect(&self) -> Rect {
        match self.axis {
            Axis::X => Rect::new(self.point.x, self.rect.ymin, self.rect.xmax, self.rect.ymax),
            Axis::Y => Rect::new(self.rect.xmin, self.point.y, self.rect.xmax, self.rect.ymax),
        }
    }
}

/// A 2d-tree: point insertion, membership, axis-aligned range queries and
/// nearest-neighbor queries over a planar point set.
///
/// Points are unique keys; inserting a point that is already present is a
/// silent no-op. All stored points must lie inside the tree's domain
/// rectangle (the unit square by default, see [`KdTree::with_domain`]).
///
/// The structure is single-threaded: `insert` takes `&mut self`, while all
/// queries are `&self` and keep no state in the tree, so read-only access
/// from several threads at once is safe in the usual Rust sense.
///
/// # Examples
/// ```
/// use kd2d::{KdTree, Point};
///
/// # fn main() -> Result<(), kd2d::Error> {
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.7, 0.2))?;
/// tree.insert(Point::new(0.5, 0.4))?;
/// tree.insert(Point::new(0.9, 0.6))?;
///
/// assert_eq!(tree.size(), 3);
/// assert!(tree.contains(Point::new(0.5, 0.4))?);
/// assert_eq!(tree.nearest(Point::new(1.0, 1.0))?, Some(Point::new(0.9, 0.6)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct KdTree {
    root: Option<Box<Node>>,
    size: usize,
    domain: Rect,
}

impl KdTree {
    /// Creates an empty tree over the unit-square domain `[0, 1] x [0, 1]`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            domain: Rect::UNIT,
        }
    }

    /// Creates an empty tree over the given domain rectangle.
    ///
    /// The domain becomes the root node's bounding rectangle; every inserted
    /// point must lie inside it.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRect`] if the domain is non-finite or inverted.
    pub fn with_domain(domain: Rect) -> Result<Self, Error> {
        check_rect(&domain)?;
        Ok(Self {
            root: None,
            size: 0,
            domain,
        })
    }

    /// The domain rectangle all stored points lie in.
    pub fn domain(&self) -> Rect {
        self.domain
    }

    /// Number of distinct points stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a point, returning `Ok(true)` if it was added and `Ok(false)`
    /// if an equal point was already present (a no-op, size unchanged).
    ///
    /// # Errors
    /// Returns [`Error::NonFinitePoint`] for NaN or infinite coordinates and
    /// [`Error::OutOfDomain`] for points outside the domain rectangle. The
    /// tree is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{KdTree, Point};
    ///
    /// # fn main() -> Result<(), kd2d::Error> {
    /// let mut tree = KdTree::new();
    /// assert!(tree.insert(Point::new(0.7, 0.2))?);
    /// assert!(!tree.insert(Point::new(0.7, 0.2))?);
    /// assert_eq!(tree.size(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, p: Point) -> Result<bool, Error> {
        check_point(p)?;
        if !self.domain.contains(p) {
            return Err(Error::OutOfDomain { x: p.x, y: p.y });
        }
        let domain = self.domain;
        let inserted = Self::put(&mut self.root, p, Axis::X, domain);
        if inserted {
            self.size += 1;
        }
        Ok(inserted)
    }

    /// Recursive descent for insertion. The axis and rectangle of a
    /// prospective new node are computed on the way down, so the root always
    /// gets the domain rectangle and each child gets its parent's rectangle
    /// clipped at the parent's point.
    fn put(slot: &mut Option<Box<Node>>, p: Point, axis: Axis, rect: Rect) -> bool {
        let Some(node) = slot else {
            *slot = Some(Box::new(Node::new(p, axis, rect)));
            return true;
        };
        match place(node.point, node.axis, p) {
            Placement::Here => false,
            Placement::Left => {
                let rect = node.left_rect();
                Self::put(&mut node.left, p, node.axis.flip(), rect)
            }
            Placement::Right => {
                let rect = node.right_rect();
                Self::put(&mut node.right, p, node.axis.flip(), rect)
            }
        }
    }

    /// Returns whether an equal point is stored.
    ///
    /// # Errors
    /// Returns [`Error::NonFinitePoint`] for NaN or infinite coordinates.
    pub fn contains(&self, p: Point) -> Result<bool, Error> {
        check_point(p)?;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match place(node.point, node.axis, p) {
                Placement::Here => return Ok(true),
                Placement::Left => cursor = node.left.as_deref(),
                Placement::Right => cursor = node.right.as_deref(),
            }
        }
        Ok(false)
    }

    /// Breadth-first iteration over the tree as `(point, axis, rectangle)`
    /// triples, root first.
    ///
    /// This is the read-only view an external renderer needs to draw the
    /// stored points and their splitting lines; the crate itself does no
    /// drawing.
    pub fn level_order(&self) -> LevelOrder<'_> {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        LevelOrder { queue }
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`KdTree::level_order`].
#[derive(Debug)]
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

impl Iterator for LevelOrder<'_> {
    type Item = (Point, Axis, Rect);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some((node.point, node.axis, node.rect))
    }
}
