//! Synthesized APNG byte fixtures used by the integration tests.

pub const GRAY_TWO_FRAME: [u8; 189] = [
  137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82,
  0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0, 58, 126, 155,
  85, 0, 0, 0, 8, 97, 99, 84, 76, 0, 0, 0, 2, 0, 0, 0,
  0, 243, 141, 147, 112, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0,
  0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 1, 0, 10, 0, 0, 90, 127, 48, 208, 0, 0, 0, 10, 73,
  68, 65, 84, 120, 218, 99, 224, 2, 0, 0, 12, 0, 11, 202, 178, 81,
  17, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0, 1, 0, 0, 0,
  1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
  10, 0, 0, 193, 12, 218, 4, 0, 0, 0, 14, 102, 100, 65, 84, 0,
  0, 0, 2, 120, 218, 99, 56, 1, 0, 0, 202, 0, 201, 70, 93, 108,
  35, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130,
];

pub const RGBA_COMPOSITE: [u8; 199] = [
  137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82,
  0, 0, 0, 2, 0, 0, 0, 2, 8, 6, 0, 0, 0, 114, 182, 13,
  36, 0, 0, 0, 8, 97, 99, 84, 76, 0, 0, 0, 2, 0, 0, 0,
  0, 243, 141, 147, 112, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0,
  0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 1, 0, 10, 0, 0, 232, 84, 220, 0, 0, 0, 0, 17, 73,
  68, 65, 84, 120, 218, 99, 248, 207, 192, 240, 31, 132, 25, 96, 12, 0,
  71, 202, 7, 249, 26, 182, 241, 169, 0, 0, 0, 26, 102, 99, 84, 76,
  0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
  0, 0, 0, 0, 0, 1, 0, 10, 0, 1, 182, 11, 234, 146, 0, 0,
  0, 17, 102, 100, 65, 84, 0, 0, 0, 2, 120, 218, 99, 96, 96, 248,
  223, 0, 0, 2, 131, 1, 128, 143, 233, 68, 106, 0, 0, 0, 0, 73,
  69, 78, 68, 174, 66, 96, 130,
];

pub const NO_ACTL_STATIC: [u8; 69] = [
  137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82,
  0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0, 144, 119, 83,
  222, 0, 0, 0, 12, 73, 68, 65, 84, 120, 218, 99, 96, 100, 98, 6,
  0, 0, 14, 0, 7, 233, 146, 55, 212, 0, 0, 0, 0, 73, 69, 78,
  68, 174, 66, 96, 130,
];

pub const BAD_CRC: [u8; 189] = [
  137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82,
  255, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0, 58, 126, 155,
  85, 0, 0, 0, 8, 97, 99, 84, 76, 0, 0, 0, 2, 0, 0, 0,
  0, 243, 141, 147, 112, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0,
  0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 1, 0, 10, 0, 0, 90, 127, 48, 208, 0, 0, 0, 10, 73,
  68, 65, 84, 120, 218, 99, 224, 2, 0, 0, 12, 0, 11, 202, 178, 81,
  17, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0, 1, 0, 0, 0,
  1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
  10, 0, 0, 193, 12, 218, 4, 0, 0, 0, 14, 102, 100, 65, 84, 0,
  0, 0, 2, 120, 218, 99, 56, 1, 0, 0, 202, 0, 201, 70, 93, 108,
  35, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130,
];

pub const SEQUENCE_SKIP: [u8; 253] = [
  137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82,
  0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0, 58, 126, 155,
  85, 0, 0, 0, 8, 97, 99, 84, 76, 0, 0, 0, 3, 0, 0, 0,
  0, 206, 237, 186, 192, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0,
  0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 1, 0, 10, 0, 0, 90, 127, 48, 208, 0, 0, 0, 10, 73,
  68, 65, 84, 120, 218, 99, 96, 5, 0, 0, 7, 0, 6, 45, 69, 24,
  7, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0, 1, 0, 0, 0,
  1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
  10, 0, 0, 193, 12, 218, 4, 0, 0, 0, 14, 102, 100, 65, 84, 0,
  0, 0, 2, 120, 218, 99, 96, 3, 0, 0, 8, 0, 7, 245, 88, 199,
  97, 0, 0, 0, 26, 102, 99, 84, 76, 0, 0, 0, 3, 0, 0, 0,
  1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
  10, 0, 0, 44, 154, 9, 237, 0, 0, 0, 14, 102, 100, 65, 84, 0,
  0, 0, 5, 120, 218, 99, 96, 7, 0, 0, 9, 0, 8, 214, 143, 231,
  82, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130,
];

