use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::handicap::{self, HandicapStyle};
use crate::ko::Ko;
use crate::notation;
use crate::stone::Stone;

/// Stones removed from the board, credited to the player whose move removed them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Rule restrictions applied by [`Board::make_move`]. All off by default,
/// in which case suicide and immediate ko recapture are played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveOptions {
    pub prevent_suicide: bool,
    pub prevent_overwrite: bool,
    pub prevent_ko: bool,
}

impl MoveOptions {
    /// Every restriction enabled.
    pub fn strict() -> Self {
        MoveOptions {
            prevent_suicide: true,
            prevent_overwrite: true,
            prevent_ko: true,
        }
    }
}

/// What a move would do, as reported by [`Board::analyze_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MoveAnalysis {
    /// Neutral sign or off-board point: the move would change nothing.
    pub pass: bool,
    pub overwrite: bool,
    pub capturing: bool,
    pub suicide: bool,
    pub ko: bool,
}

/// A Go position: cell signs in row-major order plus capture and ko state.
///
/// Moves never mutate a board in place. [`Board::make_move`] returns a new
/// snapshot, so earlier positions stay valid for undo and replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    cells: Vec<i8>,
    width: u8,
    height: u8,
    captures: Captures,
    ko: Option<Ko>,
}

impl Board {
    /// Build a board from rows of signs (`0` empty, positive Black, negative White).
    pub fn new(rows: Vec<Vec<i8>>) -> Result<Self, GoError> {
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GoError::Shape {
                row,
                expected: width,
                found,
            });
        }

        let (Ok(w), Ok(h)) = (u8::try_from(width), u8::try_from(rows.len())) else {
            return Err(GoError::TooLarge {
                width,
                height: rows.len(),
            });
        };

        Ok(Board {
            cells: rows.into_iter().flatten().map(i8::signum).collect(),
            width: w,
            height: h,
            captures: Captures::new(),
            ko: None,
        })
    }

    /// An empty board with the given dimensions.
    pub fn with_dimensions(width: u8, height: u8) -> Self {
        Board {
            cells: vec![0; width as usize * height as usize],
            width,
            height,
            captures: Captures::new(),
            ko: None,
        }
    }

    // -- Accessors --

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn get_captures(&self, stone: Stone) -> u32 {
        self.captures.get(stone)
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    /// Sign at `point`, or `None` when the point is off the board.
    pub fn get(&self, point: Point) -> Option<i8> {
        self.has(point).then(|| self.cells[self.idx(point)])
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.get(point).and_then(Stone::from_int)
    }

    pub fn has(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == 0)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Every on-board point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn distance((x1, y1): Point, (x2, y2): Point) -> u32 {
        x1.abs_diff(x2) as u32 + y1.abs_diff(y2) as u32
    }

    // -- Replacement API --

    /// Overwrite a single cell. No capture logic runs; off-board points are ignored.
    pub fn set(mut self, point: Point, sign: i8) -> Self {
        if self.has(point) {
            self.put(point, sign.signum());
        }
        self
    }

    /// Remove every stone. Captures and ko are left as they were.
    pub fn clear(mut self) -> Self {
        self.cells.fill(0);
        self
    }

    /// A pass: the position is unchanged but any ko is lifted.
    pub fn pass(&self) -> Board {
        let mut board = self.clone();
        board.ko = None;
        board
    }

    /// Play a stone for `sign` at `point` and return the resulting position.
    ///
    /// A neutral sign or an off-board point returns an unchanged copy.
    /// Captures are resolved before ko and suicide are considered, so a move
    /// is only suicide when it removes no opposing stones.
    pub fn make_move(&self, sign: i8, point: Point, options: MoveOptions) -> Result<Board, GoError> {
        let mut board = self.clone();

        let Some(stone) = Stone::from_int(sign) else {
            return Ok(board);
        };
        if !self.has(point) {
            return Ok(board);
        }

        if options.prevent_overwrite && self.stone_at(point).is_some() {
            return Err(GoError::Overwrite);
        }
        if options.prevent_ko && self.ko.is_some_and(|ko| ko.forbids(stone, point)) {
            return Err(GoError::Ko);
        }

        board.put(point, stone.to_int());

        let neighbors = board.neighbors(point);
        let dead_neighbors: ArrayVec<Point, 4> = neighbors
            .iter()
            .copied()
            .filter(|&n| board.stone_at(n) == Some(stone.opp()) && !board.has_liberties(n))
            .collect();

        let mut dead_stones = Vec::new();
        for n in dead_neighbors {
            if board.stone_at(n).is_none() {
                continue;
            }
            for p in board.chain(n) {
                board.put(p, 0);
                dead_stones.push(p);
            }
        }
        if !dead_stones.is_empty() {
            board.captures.add(stone, dead_stones.len() as u32);
            tracing::debug!(
                "{stone} at {point:?} captured {} stone(s)",
                dead_stones.len()
            );
        }

        let liberties = board.liberties(point);
        let has_friendly_neighbor = neighbors.iter().any(|&n| board.stone_at(n) == Some(stone));

        board.ko = if dead_stones.len() == 1
            && liberties.len() == 1
            && liberties[0] == dead_stones[0]
            && !has_friendly_neighbor
        {
            tracing::debug!("ko at {:?} for {}", dead_stones[0], stone.opp());
            Some(Ko {
                point: dead_stones[0],
                illegal: stone.opp(),
            })
        } else {
            None
        };

        if dead_stones.is_empty() && liberties.is_empty() {
            if options.prevent_suicide {
                return Err(GoError::Suicide);
            }
            let chain = board.chain(point);
            for &p in &chain {
                board.put(p, 0);
            }
            board.captures.add(stone.opp(), chain.len() as u32);
            tracing::debug!("{stone} at {point:?} self-captured {} stone(s)", chain.len());
        }

        Ok(board)
    }

    /// Preview a move without committing it.
    pub fn analyze_move(&self, sign: i8, point: Point) -> MoveAnalysis {
        let stone = match Stone::from_int(sign) {
            Some(s) if self.has(point) => s,
            _ => {
                return MoveAnalysis {
                    pass: true,
                    ..MoveAnalysis::default()
                };
            }
        };

        let mut scratch = self.clone();
        scratch.put(point, stone.to_int());

        let capturing = scratch
            .neighbors(point)
            .iter()
            .any(|&n| scratch.stone_at(n) == Some(stone.opp()) && !scratch.has_liberties(n));
        let suicide = !capturing && !scratch.has_liberties(point);

        MoveAnalysis {
            pass: false,
            overwrite: self.stone_at(point).is_some(),
            capturing,
            suicide,
            ko: self.ko.is_some_and(|ko| ko.forbids(stone, point)),
        }
    }

    /// Points whose contents differ from `other`, or `None` if the dimensions differ.
    pub fn diff(&self, other: &Board) -> Option<Vec<Point>> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        Some(
            self.points()
                .filter(|&p| self.cells[self.idx(p)] != other.cells[other.idx(p)])
                .collect(),
        )
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if !self.has((x, y)) {
            return result;
        }
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.width {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.height {
            result.push((x, y + 1));
        }
        result
    }

    /// Flood-fill the cells connected to `point` that share its sign.
    /// On an empty point this is the surrounding empty region.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        match self.get(point) {
            Some(sign) => self.connected_component(point, |s| s == sign),
            None => Vec::new(),
        }
    }

    /// Empty points adjacent to the chain at `point`.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        if self.stone_at(point).is_none() {
            return Vec::new();
        }
        self.chain_liberties(&self.chain(point))
    }

    /// Whether the chain at `point` touches an empty point. Stops at the first one found.
    pub fn has_liberties(&self, point: Point) -> bool {
        let Some(stone) = self.stone_at(point) else {
            return false;
        };
        let sign = stone.to_int();

        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![point];
        visited[self.idx(point)] = true;

        while let Some(p) = stack.pop() {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                match self.cells[ni] {
                    0 => return true,
                    s if s == sign && !visited[ni] => {
                        visited[ni] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }

        false
    }

    /// Stones of `point`'s color reachable through that color and empty points.
    pub fn related_chains(&self, point: Point) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };
        let sign = stone.to_int();

        self.connected_component(point, |s| s == sign || s == 0)
            .into_iter()
            .filter(|&p| self.cells[self.idx(p)] == sign)
            .collect()
    }

    /// True when every chain on the board has at least one liberty.
    pub fn is_valid(&self) -> bool {
        let mut checked = vec![false; self.cells.len()];

        for p in self.points() {
            let i = self.idx(p);
            if self.cells[i] == 0 || checked[i] {
                continue;
            }
            if !self.has_liberties(p) {
                return false;
            }
            for c in self.chain(p) {
                checked[self.idx(c)] = true;
            }
        }

        true
    }

    fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.cells.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.cells[ni] == 0 {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Explicit-stack flood fill from `start` over cells whose sign passes `include`.
    fn connected_component(&self, start: Point, include: impl Fn(i8) -> bool) -> Vec<Point> {
        let mut visited = vec![false; self.cells.len()];
        let mut result = Vec::new();
        let mut stack = vec![start];
        visited[self.idx(start)] = true;

        while let Some(p) = stack.pop() {
            result.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && include(self.cells[ni]) {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Geometry and notation --

    pub fn handicap_placement(&self, count: usize, style: HandicapStyle) -> Vec<Point> {
        handicap::handicap_points(self.width, self.height, count, style)
    }

    /// Human notation such as `"D16"`, or an empty string for off-board points.
    pub fn stringify_vertex(&self, point: Point) -> String {
        notation::stringify_vertex(self.width, self.height, point)
    }

    pub fn parse_vertex(&self, s: &str) -> Option<Point> {
        notation::parse_vertex(self.width, self.height, s)
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn put(&mut self, point: Point, sign: i8) {
        let i = self.idx(point);
        self.cells[i] = sign;
    }
}
