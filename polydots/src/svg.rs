use crate::error::ParseError;
use crate::geometry::limits;
use crate::model::Point;
use crate::options::CommandPolicy;
use std::collections::VecDeque;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
    pub point: Point,
    pub starts_subpath: bool,
}

/// Lazy reader over the points of an `M`/`L`/`Z` path. Cloning before
/// iteration (or calling [`PathPoints::restart`]) replays the same sequence.
#[derive(Clone, Debug)]
pub struct PathPoints<'a> {
    bytes: &'a [u8],
    policy: CommandPolicy,
    i: usize,
    start: Option<Point>,
    cur: Option<Point>,
    closed: bool,
    pending: VecDeque<PathPoint>,
    commands: usize,
    subpaths: usize,
    points: usize,
    done: bool,
}

impl<'a> PathPoints<'a> {
    pub fn new(d: &'a str, policy: CommandPolicy) -> Self {
        PathPoints::new_from_bytes(d.as_bytes(), policy)
    }

    pub fn restart(&mut self) {
        *self = PathPoints::new_from_bytes(self.bytes, self.policy);
    }

    fn new_from_bytes(bytes: &'a [u8], policy: CommandPolicy) -> Self {
        PathPoints {
            bytes,
            policy,
            i: 0,
            start: None,
            cur: None,
            closed: false,
            pending: VecDeque::new(),
            commands: 0,
            subpaths: 0,
            points: 0,
            done: false,
        }
    }

    fn emit(&mut self, point: Point, starts_subpath: bool) -> Result<(), ParseError> {
        self.points += 1;
        if self.points > limits::MAX_SVG_POINTS {
            return Err(ParseError::TooLarge("points"));
        }
        if starts_subpath {
            self.subpaths += 1;
            if self.subpaths > limits::MAX_SVG_SUBPATHS {
                return Err(ParseError::TooLarge("subpaths"));
            }
        }
        self.pending.push_back(PathPoint { point, starts_subpath });
        Ok(())
    }

    // Reads one command and queues its points. Ok(false) at end of input.
    fn step(&mut self) -> Result<bool, ParseError> {
        if self.bytes.len() > limits::MAX_SVG_TOKENS {
            return Err(ParseError::TooLarge("path data length"));
        }
        skip_ws(self.bytes, &mut self.i);
        if self.i >= self.bytes.len() {
            return Ok(false);
        }
        let offset = self.i;
        let c = self.bytes[self.i];
        if !c.is_ascii_alphabetic() {
            return Err(ParseError::UnexpectedCharacter { found: c as char, offset });
        }
        self.i += 1;
        self.commands += 1;
        if self.commands > limits::MAX_SVG_COMMANDS {
            return Err(ParseError::TooLarge("commands"));
        }
        let command = c as char;
        let supported = matches!(c, b'M' | b'L' | b'Z' | b'z');
        if !supported && self.policy == CommandPolicy::Reject {
            return Err(ParseError::UnsupportedCommand { command, offset });
        }
        let args = read_args(self.bytes, &mut self.i)?;

        match c {
            b'M' => {
                let pts = pairs(command, offset, &args)?;
                for (n, p) in pts.into_iter().enumerate() {
                    if n == 0 {
                        self.start = Some(p);
                        self.closed = false;
                    }
                    self.emit(p, n == 0)?;
                    self.cur = Some(p);
                }
            }
            b'L' => {
                let start = match (self.cur, self.start) {
                    (Some(_), Some(s)) => s,
                    _ => return Err(ParseError::MissingMoveTo { command, offset }),
                };
                let pts = pairs(command, offset, &args)?;
                if self.closed {
                    // drawing on after a closepath opens a fresh subpath at the start point
                    self.emit(start, true)?;
                    self.closed = false;
                }
                for p in pts {
                    self.emit(p, false)?;
                    self.cur = Some(p);
                }
            }
            b'Z' | b'z' => {
                let (cur, start) = match (self.cur, self.start) {
                    (Some(c), Some(s)) => (c, s),
                    _ => return Err(ParseError::MissingMoveTo { command, offset }),
                };
                if !args.is_empty() {
                    return Err(ParseError::ArgumentCount { command, offset, got: args.len() });
                }
                if !self.closed && cur.key() != start.key() {
                    self.emit(start, false)?;
                }
                self.cur = Some(start);
                self.closed = true;
            }
            _ => {
                warn!(%command, offset, args = args.len(), "skipping unsupported path command");
            }
        }
        Ok(true)
    }
}

impl Iterator for PathPoints<'_> {
    type Item = Result<PathPoint, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.pending.pop_front() {
                return Some(Ok(p));
            }
            if self.done {
                return None;
            }
            match self.step() {
                Ok(true) => continue,
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    self.pending.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Materializes a path into one point list per subpath.
pub fn extract_subpaths(d: &str, policy: CommandPolicy) -> Result<Vec<Vec<Point>>, ParseError> {
    let mut out: Vec<Vec<Point>> = Vec::new();
    for item in PathPoints::new(d, policy) {
        let pp = item?;
        if pp.starts_subpath || out.is_empty() {
            out.push(Vec::new());
        }
        if let Some(last) = out.last_mut() {
            last.push(pp.point);
        }
    }
    Ok(out)
}

/// All points of a path in order, ignoring subpath boundaries.
pub fn extract_points(d: &str, policy: CommandPolicy) -> Result<Vec<Point>, ParseError> {
    PathPoints::new(d, policy).map(|r| r.map(|pp| pp.point)).collect()
}

/// Writes a closed outline back out as `M … L … Z`.
pub fn to_path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (n, p) in points.iter().enumerate() {
        if n == 0 {
            d.push_str(&format!("M {} {}", p.x, p.y));
        } else {
            d.push_str(&format!(" L {} {}", p.x, p.y));
        }
    }
    if !points.is_empty() {
        d.push_str(" Z");
    }
    d
}

fn pairs(command: char, offset: usize, args: &[f32]) -> Result<Vec<Point>, ParseError> {
    if args.is_empty() || args.len() % 2 != 0 {
        return Err(ParseError::ArgumentCount { command, offset, got: args.len() });
    }
    Ok(args.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1])).collect())
}

fn read_args(bytes: &[u8], i: &mut usize) -> Result<Vec<f32>, ParseError> {
    let mut args = Vec::new();
    loop {
        skip_ws(bytes, i);
        if *i >= bytes.len() || bytes[*i].is_ascii_alphabetic() {
            return Ok(args);
        }
        let at = *i;
        let v = parse_num(bytes, i).ok_or(ParseError::InvalidNumber { offset: at })?;
        if !limits::in_coord_bounds(v) {
            return Err(ParseError::CoordinateOutOfRange { offset: at });
        }
        args.push(v);
    }
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() {
        let c = bytes[*i];
        if c == b' ' || c == b'\n' || c == b'\r' || c == b'\t' || c == b',' {
            *i += 1;
        } else {
            break;
        }
    }
}

// SVG number grammar: sign? digits? ('.' digits?)? (exp sign? digits)?
// A second '.' or a sign ends the number, so "10-5" and ".5.5" are two numbers.
fn parse_num(bytes: &[u8], i: &mut usize) -> Option<f32> {
    let start = *i;
    let mut j = *i;
    if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
        j += 1;
    }
    let mut digits = 0;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
        digits += 1;
    }
    if j < bytes.len() && bytes[j] == b'.' {
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    if j < bytes.len() && (bytes[j] == b'e' || bytes[j] == b'E') {
        let mut k = j + 1;
        if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        if k < bytes.len() && bytes[k].is_ascii_digit() {
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            j = k;
        }
    }
    let s = std::str::from_utf8(&bytes[start..j]).ok()?;
    let v = s.parse::<f32>().ok()?;
    *i = j;
    Some(v)
}
