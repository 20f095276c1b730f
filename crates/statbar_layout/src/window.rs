//! One bar window per monitor.
//!
//! Geometry entries pair with heads by index. Past the end of the list the
//! last entry repeats, unless it is `None`, which ends planning. A `None`
//! inside the list skips just that head. Planned windows are numbered in
//! order; those numbers are the screen indices that `{S` directives use.

use serde::Serialize;

use crate::config::{Geometry, Position, Rect};

/// Space a dock window reserves at a screen edge, in root coordinates.
///
/// Only one of `top` and `bottom` is non-zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct Strut {
    pub top: u32,
    pub bottom: u32,
    pub start_x: u32,
    pub end_x: u32,
}

/// A planned bar window.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct BarWindow {
    /// Index of the head this window sits on.
    pub head: usize,
    /// Position and size in root coordinates.
    pub rect: Rect,
    pub strut: Strut,
}

/// Height of the root window spanning every head.
pub fn root_height(heads: &[Rect]) -> u32 {
    let bottom = heads.iter().map(Rect::bottom).max().unwrap_or(0);
    u32::try_from(bottom.max(0)).unwrap_or(u32::MAX)
}

/// Plan bar windows for `heads`.
pub fn plan_windows(
    heads: &[Rect],
    geometries: &[Option<Geometry>],
    position: Position,
    root_height: u32,
) -> Vec<BarWindow> {
    let fallback = [Some(Geometry::DEFAULT)];
    let geometries = if geometries.is_empty() {
        &fallback[..]
    } else {
        geometries
    };

    let mut windows = Vec::with_capacity(heads.len());
    for (index, head) in heads.iter().enumerate() {
        let geometry = match geometries.get(index) {
            Some(Some(geometry)) => *geometry,
            Some(None) => continue,
            None => match geometries.last() {
                Some(Some(geometry)) => *geometry,
                _ => break,
            },
        };
        let window = plan_window(index, head, geometry, position, root_height);
        tracing::debug!(head = index, rect = %window.rect, ?position, "planned bar window");
        windows.push(window);
    }
    windows
}

fn plan_window(
    index: usize,
    head: &Rect,
    geometry: Geometry,
    position: Position,
    root_height: u32,
) -> BarWindow {
    let width = match geometry.width {
        0 => head.width,
        width => u32::from(width),
    };
    let height = match geometry.height {
        0 => head.height,
        height => u32::from(height),
    };
    let start_x = u32::from(geometry.x);
    let end_x = start_x.saturating_add(width);

    let (y, strut) = match position {
        Position::Top => (
            i64::from(geometry.y),
            Strut {
                top: height,
                bottom: 0,
                start_x,
                end_x,
            },
        ),
        Position::Bottom => {
            let y = i64::from(head.height) - i64::from(height) - i64::from(geometry.y);
            let bottom = i64::from(root_height) - y;
            (
                y,
                Strut {
                    top: 0,
                    bottom: u32::try_from(bottom.max(0)).unwrap_or(u32::MAX),
                    start_x,
                    end_x,
                },
            )
        }
    };

    BarWindow {
        head: index,
        rect: Rect::new(
            saturate(i64::from(geometry.x) + i64::from(head.x)),
            saturate(y + i64::from(head.y)),
            width,
            height,
        ),
        strut,
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests;
