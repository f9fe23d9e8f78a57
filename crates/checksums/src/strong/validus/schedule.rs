//! Fixed schedule of the compression function.
//!
//! Each round runs 48 steps. A step names the block word it consumes, its
//! round constant, and the left/right rotation pair. Every block word is read
//! exactly once per round; the word order differs between rounds.

/// Initial accumulator words loaded by [`Validus::new`](super::Validus::new).
pub(super) const INITIAL_STATE: [u32; 6] = [
    0x81010881,
    0xA529298B,
    0x66AC654A,
    0x52865650,
    0x18529234,
    0x08508024,
];

/// Number of rounds in one compression.
pub(super) const ROUNDS: usize = 4;

/// Number of steps per round; equal to the number of words in a block.
pub(super) const STEPS_PER_ROUND: usize = 48;

/// One mixing step of the compression function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Step {
    /// Index of the block word consumed by this step.
    pub(super) word: usize,
    /// Round constant added to the block word.
    pub(super) constant: u32,
    /// Left rotation applied to `word + constant`.
    pub(super) rotl: u32,
    /// Right rotation applied to the updated register.
    pub(super) rotr: u32,
}

const fn step(word: usize, constant: u32, rotl: u32, rotr: u32) -> Step {
    Step {
        word,
        constant,
        rotl,
        rotr,
    }
}

pub(super) const SCHEDULE: [[Step; STEPS_PER_ROUND]; ROUNDS] = [
    [
        step(47, 0x4528A03E, 2, 3),
        step(46, 0xCABBB352, 7, 6),
        step(45, 0x8147ED07, 10, 9),
        step(44, 0xAC5567E6, 15, 12),
        step(43, 0x244F0AE0, 20, 21),
        step(42, 0x7AE6DC24, 25, 24),
        step(41, 0x607FDE7A, 2, 3),
        step(40, 0xED604141, 7, 6),
        step(39, 0x8B601567, 10, 9),
        step(38, 0x94994DDD, 15, 12),
        step(37, 0x00910572, 20, 21),
        step(36, 0x6C036810, 25, 24),
        step(35, 0x74273753, 2, 3),
        step(34, 0x11809AEC, 7, 6),
        step(33, 0x9EC28BE7, 10, 9),
        step(32, 0x856B6A07, 15, 12),
        step(31, 0xDCC772A0, 20, 21),
        step(30, 0x54854204, 25, 24),
        step(29, 0x7E8DDF77, 2, 3),
        step(28, 0x343C0872, 7, 6),
        step(27, 0xB9E401F3, 10, 9),
        step(26, 0x8001489E, 15, 12),
        step(25, 0xBBCC20AB, 20, 21),
        step(24, 0x364B7F69, 25, 24),
        step(0, 0x7EDFBBD5, 2, 3),
        step(1, 0x52CE4099, 7, 6),
        step(2, 0xDA9B320E, 10, 9),
        step(3, 0x84C954BC, 15, 12),
        step(4, 0xA03FA6A0, 20, 21),
        step(5, 0x13BE82F2, 25, 24),
        step(6, 0x7516470E, 2, 3),
        step(7, 0x6AC7D4C0, 7, 6),
        step(8, 0xFE4CF293, 10, 9),
        step(9, 0x93620C9C, 15, 12),
        step(10, 0x8C53D058, 20, 21),
        step(11, 0xEF9EE2C6, 25, 24),
        step(12, 0x61F9166F, 2, 3),
        step(13, 0x7A3FDA68, 7, 6),
        step(14, 0x22215B08, 10, 9),
        step(15, 0xAAA1C60C, 15, 12),
        step(16, 0x819EDDD8, 20, 21),
        step(17, 0xCCCD47FE, 25, 24),
        step(18, 0x470DF3E1, 2, 3),
        step(19, 0x7FFADD92, 7, 6),
        step(20, 0x433DC03C, 10, 9),
        step(21, 0xC8AE64A3, 15, 12),
        step(22, 0x80FB26C0, 20, 21),
        step(23, 0xAE0FC014, 25, 24),
    ],
    [
        step(22, 0x2679D104, 5, 4),
        step(20, 0x7B8401BE, 13, 14),
        step(18, 0x5EFEE8A1, 17, 16),
        step(23, 0xEB231E3C, 22, 19),
        step(21, 0x8A75B5AE, 26, 23),
        step(19, 0x95D92CE8, 28, 29),
        step(16, 0x02D50CAF, 5, 4),
        step(14, 0x6D365104, 13, 14),
        step(12, 0x732ED60F, 17, 16),
        step(17, 0x0F414B6F, 22, 19),
        step(15, 0x9D4D3E47, 26, 23),
        step(13, 0x861754DC, 28, 29),
        step(10, 0xDEF6868E, 5, 4),
        step(8, 0x56357B91, 13, 14),
        step(6, 0x7E31DBF2, 17, 16),
        step(11, 0x322860B2, 22, 19),
        step(9, 0xB8018321, 26, 23),
        step(7, 0x800B8D5C, 28, 29),
        step(4, 0xBDB9B81F, 5, 4),
        step(2, 0x38569B47, 13, 14),
        step(0, 0x7F276A7B, 17, 16),
        step(5, 0x51109A87, 22, 19),
        step(3, 0xD871F179, 26, 23),
        step(1, 0x843121FC, 28, 29),
        step(25, 0xA1C46FE1, 5, 4),
        step(27, 0x15FAD577, 13, 14),
        step(29, 0x75FBF212, 17, 16),
        step(24, 0x6983B065, 22, 19),
        step(26, 0xFC09029A, 26, 23),
        step(28, 0x9233821D, 28, 29),
        step(31, 0x8D50D2F4, 5, 4),
        step(33, 0xF1DED4B0, 13, 14),
        step(35, 0x636A723D, 17, 16),
        step(30, 0x798F09EE, 22, 19),
        step(32, 0x1FF0EE3A, 26, 23),
        step(34, 0xA8F4FD78, 28, 29),
        step(37, 0x81FFF238, 5, 4),
        step(39, 0xCEE2F829, 13, 14),
        step(41, 0x48ED9435, 17, 16),
        step(36, 0x7FEB76B7, 22, 19),
        step(38, 0x414D7B3D, 26, 23),
        step(40, 0xC6A58615, 28, 29),
        step(43, 0x80B8912B, 5, 4),
        step(45, 0xAFD0AB19, 13, 14),
        step(47, 0x28A180F1, 17, 16),
        step(42, 0x7C173E98, 22, 19),
        step(44, 0x5D7653C5, 26, 23),
        step(46, 0xE8E7A7B1, 28, 29),
    ],
    [
        step(1, 0x8994C3FB, 3, 2),
        step(0, 0x97219014, 6, 7),
        step(3, 0x0518D9C1, 9, 10),
        step(2, 0x6E6076FC, 12, 15),
        step(5, 0x722D372E, 21, 20),
        step(4, 0x0D00C2A5, 24, 25),
        step(7, 0x9BDFDBB4, 3, 2),
        step(6, 0x86CD0770, 6, 7),
        step(9, 0xE12840FF, 9, 10),
        step(8, 0x57DECA91, 12, 15),
        step(11, 0x7DCBB8A9, 21, 20),
        step(10, 0x3010B2D0, 24, 25),
        step(13, 0xB624CAE9, 3, 2),
        step(12, 0x80201605, 6, 7),
        step(15, 0xBFACA0B5, 9, 10),
        step(14, 0x3A5D3213, 12, 15),
        step(17, 0x7F64E5A9, 21, 20),
        step(16, 0x4F4C7390, 24, 25),
        step(19, 0xD64BDD44, 3, 2),
        step(18, 0x83A2DDFC, 6, 7),
        step(21, 0xA350C878, 9, 10),
        step(20, 0x18356491, 12, 15),
        step(23, 0x76D825F1, 21, 20),
        step(22, 0x683714FF, 24, 25),
        step(46, 0xF9C56410, 3, 2),
        step(47, 0x910DC6A7, 6, 7),
        step(44, 0x8E5708EE, 9, 10),
        step(45, 0xF41FE8CA, 12, 15),
        step(42, 0x64D3D441, 21, 20),
        step(43, 0x78D478E5, 24, 25),
        step(40, 0x1DBDF16B, 3, 2),
        step(41, 0xA74F3092, 6, 7),
        step(38, 0x826B225F, 9, 10),
        step(39, 0xD0FC9903, 12, 15),
        step(36, 0x4AC75AC1, 21, 20),
        step(37, 0x7FD1CCAA, 24, 25),
        step(34, 0x3F57F910, 3, 2),
        step(35, 0xC4A14172, 6, 7),
        step(32, 0x808031A0, 9, 10),
        step(33, 0xB19804F1, 12, 15),
        step(30, 0x2AC5EE66, 21, 20),
        step(31, 0x7CA086E3, 24, 25),
        step(28, 0x5BE63F66, 3, 2),
        step(29, 0xE6AE0B79, 6, 7),
        step(26, 0x88BD5259, 9, 10),
        step(27, 0x98725D07, 12, 15),
        step(24, 0x075C3E24, 21, 20),
        step(25, 0x6F81C20D, 24, 25),
    ],
    [
        step(24, 0x71226F5D, 4, 5),
        step(26, 0x0ABF2ECD, 14, 13),
        step(28, 0x9A7A817E, 16, 17),
        step(25, 0x878C732E, 19, 22),
        step(27, 0xE35C74E1, 23, 26),
        step(29, 0x59810CE8, 29, 28),
        step(30, 0x7D5B7DCC, 4, 5),
        step(32, 0x2DF529C6, 14, 13),
        step(34, 0xB44DFF8A, 16, 17),
        step(31, 0x803EE0F3, 19, 22),
        step(33, 0xC1A4B268, 23, 26),
        step(35, 0x3C5F1A33, 29, 28),
        step(36, 0x7F982871, 4, 5),
        step(38, 0x4D81EFF9, 14, 13),
        step(40, 0xD429218F, 16, 17),
        step(37, 0x831E9426, 19, 22),
        step(39, 0xA4E49098, 23, 26),
        step(41, 0x1A6E027A, 29, 28),
        step(42, 0x77AAD103, 4, 5),
        step(44, 0x66E21D3F, 14, 13),
        step(46, 0xF7824573, 16, 17),
        step(43, 0x8FF0F1C9, 19, 22),
        step(45, 0x8F665D3E, 23, 26),
        step(47, 0xF661F0CA, 29, 28),
        step(23, 0x66351F7D, 4, 5),
        step(21, 0x78103647, 14, 13),
        step(19, 0x1B8891C7, 16, 17),
        step(22, 0xA5B08130, 19, 22),
        step(20, 0x82E065B1, 23, 26),
        step(18, 0xD319FF6A, 29, 28),
        step(17, 0x4C9B2181, 4, 5),
        step(15, 0x7FADE179, 14, 13),
        step(13, 0x3D5D61F3, 16, 17),
        step(16, 0xC2A1C024, 19, 22),
        step(14, 0x80520CA3, 23, 26),
        step(12, 0xB365A915, 29, 28),
        step(11, 0x2CE6ED63, 4, 5),
        step(9, 0x7D1FCF9C, 14, 13),
        step(7, 0x5A4ECB9D, 16, 17),
        step(10, 0xE4767747, 19, 22),
        step(8, 0x87EF7212, 23, 26),
        step(6, 0x99CB78BD, 29, 28),
        step(5, 0x099F0B5D, 4, 5),
        step(3, 0x709A1B02, 14, 13),
        step(1, 0x700E9401, 16, 17),
        step(4, 0x087CBE3D, 19, 22),
        step(2, 0x991D4C51, 23, 26),
        step(0, 0x885588BD, 29, 28),
    ],
];
