use super::types::Line;

// 0 1 2
// 3 4 5
// 6 7 8
pub static CLASSIC_LINES: &[Line] = &[
    Line::new(&[0, 1, 2]),
    Line::new(&[3, 4, 5]),
    Line::new(&[6, 7, 8]),
    Line::new(&[0, 3, 6]),
    Line::new(&[1, 4, 7]),
    Line::new(&[2, 5, 8]),
    Line::new(&[0, 4, 8]),
    Line::new(&[2, 4, 6]),
];

//  0  1  2  3
//  4  5  6  7
//  8  9 10 11
// 12 13 14 15
pub static EXTENDED_LINES: &[Line] = &[
    // rows
    Line::new(&[0, 1, 2, 3]),
    Line::new(&[4, 5, 6, 7]),
    Line::new(&[8, 9, 10, 11]),
    Line::new(&[12, 13, 14, 15]),
    // columns
    Line::new(&[0, 4, 8, 12]),
    Line::new(&[1, 5, 9, 13]),
    Line::new(&[2, 6, 10, 14]),
    Line::new(&[3, 7, 11, 15]),
    // diagonals
    Line::new(&[0, 5, 10, 15]),
    Line::new(&[3, 6, 9, 12]),
    // 2x2 blocks
    Line::new(&[0, 1, 4, 5]),
    Line::new(&[1, 2, 5, 6]),
    Line::new(&[2, 3, 6, 7]),
    Line::new(&[4, 5, 8, 9]),
    Line::new(&[5, 6, 9, 10]),
    Line::new(&[6, 7, 10, 11]),
    Line::new(&[8, 9, 12, 13]),
    Line::new(&[9, 10, 13, 14]),
    Line::new(&[10, 11, 14, 15]),
];
