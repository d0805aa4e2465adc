//! Power-of-five multipliers, split into two words each.
//!
//! `POW5_SPLIT[i]` holds the top `POW5_BITCOUNT` bits of `5^i`, and `POW5_INV_SPLIT[i]` holds
//! `floor(2^(pow5bits(i) - 1 + POW5_INV_BITCOUNT) / 5^i) + 1`, where `pow5bits(i)` is the bit length
//! of `5^i`. The binary32 tables fit in two `u32`s per entry, the binary64 ones in two `u64`s.

use crate::conv::common::{Multiplier, Multipliers};

/// Tables for `f32`.
pub mod b32 {
    use super::*;

    pub const POW5_INV_BITCOUNT: i32 = 59;
    pub const POW5_BITCOUNT: i32 = 61;

    /// Indexed by `-e10` when parsing, and by `q = log10(2^e2)` when formatting.
    pub static POW5_INV_SPLIT: Multipliers<u32, 55> = Multipliers::new([
        Multiplier { hi: 0x08000000, lo: 0x00000001 },
        Multiplier { hi: 0x06666666, lo: 0x66666667 },
        Multiplier { hi: 0x051eb851, lo: 0xeb851eb9 },
        Multiplier { hi: 0x04189374, lo: 0xbc6a7efa },
        Multiplier { hi: 0x068db8ba, lo: 0xc710cb2a },
        Multiplier { hi: 0x053e2d62, lo: 0x38da3c22 },
        Multiplier { hi: 0x0431bde8, lo: 0x2d7b634e },
        Multiplier { hi: 0x06b5fca6, lo: 0xaf2bd216 },
        Multiplier { hi: 0x055e63b8, lo: 0x8c230e78 },
        Multiplier { hi: 0x044b82fa, lo: 0x09b5a52d },
        Multiplier { hi: 0x06df37f6, lo: 0x75ef6eae },
        Multiplier { hi: 0x057f5ff8, lo: 0x5e592558 },
        Multiplier { hi: 0x0465e660, lo: 0x4b7a8447 },
        Multiplier { hi: 0x0709709a, lo: 0x125da071 },
        Multiplier { hi: 0x05a126e1, lo: 0xa84ae6c1 },
        Multiplier { hi: 0x0480ebe7, lo: 0xb9d58567 },
        Multiplier { hi: 0x0734aca5, lo: 0xf6226f0b },
        Multiplier { hi: 0x05c3bd51, lo: 0x91b525a3 },
        Multiplier { hi: 0x049c9774, lo: 0x7490eae9 },
        Multiplier { hi: 0x0760f253, lo: 0xedb4ab0e },
        Multiplier { hi: 0x05e72843, lo: 0x249088d8 },
        Multiplier { hi: 0x04b8ed02, lo: 0x83a6d3e0 },
        Multiplier { hi: 0x078e4804, lo: 0x05d7b966 },
        Multiplier { hi: 0x060b6cd0, lo: 0x04ac9452 },
        Multiplier { hi: 0x04d5f0a6, lo: 0x6a23a9db },
        Multiplier { hi: 0x07bcb43d, lo: 0x769f762b },
        Multiplier { hi: 0x06309031, lo: 0x2bb2c4ef },
        Multiplier { hi: 0x04f3a68d, lo: 0xbc8f03f3 },
        Multiplier { hi: 0x07ec3daf, lo: 0x94180651 },
        Multiplier { hi: 0x065697bf, lo: 0xa9acd1da },
        Multiplier { hi: 0x051212ff, lo: 0xbaf0a7e2 },
        Multiplier { hi: 0x040e7599, lo: 0x625a1fe8 },
        Multiplier { hi: 0x067d88f5, lo: 0x6a29cca6 },
        Multiplier { hi: 0x05313a5d, lo: 0xee87d6ec },
        Multiplier { hi: 0x042761e4, lo: 0xbed31256 },
        Multiplier { hi: 0x06a5696d, lo: 0xfe1e83bd },
        Multiplier { hi: 0x05512124, lo: 0xcb4b9c97 },
        Multiplier { hi: 0x0440e750, lo: 0xa2a2e3ac },
        Multiplier { hi: 0x06ce3ee7, lo: 0x6a9e3913 },
        Multiplier { hi: 0x0571cbec, lo: 0x554b60dc },
        Multiplier { hi: 0x045b0989, lo: 0xddd5e717 },
        Multiplier { hi: 0x06f80f42, lo: 0xfc8971be },
        Multiplier { hi: 0x05933f68, lo: 0xca078e31 },
        Multiplier { hi: 0x0475cc53, lo: 0xd4d2d828 },
        Multiplier { hi: 0x0722e086, lo: 0x215159d9 },
        Multiplier { hi: 0x05b5806b, lo: 0x4ddaae47 },
        Multiplier { hi: 0x04913389, lo: 0x0b155839 },
        Multiplier { hi: 0x074eb8db, lo: 0x44eef38e },
        Multiplier { hi: 0x05d893e2, lo: 0x9d8bf60b },
        Multiplier { hi: 0x04ad431b, lo: 0xb13cc4d6 },
        Multiplier { hi: 0x077b9e92, lo: 0xb52e07bc },
        Multiplier { hi: 0x05fc7edb, lo: 0xc424d2fd },
        Multiplier { hi: 0x04c9ff16, lo: 0x3683dbfe },
        Multiplier { hi: 0x07a99823, lo: 0x8a6c932f },
        Multiplier { hi: 0x06214682, lo: 0xd523a8f3 },
    ]);

    /// Indexed by `e10` when parsing, and by `-e2 - log10(5^-e2)` (plus one) when formatting.
    pub static POW5_SPLIT: Multipliers<u32, 48> = Multipliers::new([
        Multiplier { hi: 0x10000000, lo: 0x00000000 },
        Multiplier { hi: 0x14000000, lo: 0x00000000 },
        Multiplier { hi: 0x19000000, lo: 0x00000000 },
        Multiplier { hi: 0x1f400000, lo: 0x00000000 },
        Multiplier { hi: 0x13880000, lo: 0x00000000 },
        Multiplier { hi: 0x186a0000, lo: 0x00000000 },
        Multiplier { hi: 0x1e848000, lo: 0x00000000 },
        Multiplier { hi: 0x1312d000, lo: 0x00000000 },
        Multiplier { hi: 0x17d78400, lo: 0x00000000 },
        Multiplier { hi: 0x1dcd6500, lo: 0x00000000 },
        Multiplier { hi: 0x12a05f20, lo: 0x00000000 },
        Multiplier { hi: 0x174876e8, lo: 0x00000000 },
        Multiplier { hi: 0x1d1a94a2, lo: 0x00000000 },
        Multiplier { hi: 0x12309ce5, lo: 0x40000000 },
        Multiplier { hi: 0x16bcc41e, lo: 0x90000000 },
        Multiplier { hi: 0x1c6bf526, lo: 0x34000000 },
        Multiplier { hi: 0x11c37937, lo: 0xe0800000 },
        Multiplier { hi: 0x16345785, lo: 0xd8a00000 },
        Multiplier { hi: 0x1bc16d67, lo: 0x4ec80000 },
        Multiplier { hi: 0x1158e460, lo: 0x913d0000 },
        Multiplier { hi: 0x15af1d78, lo: 0xb58c4000 },
        Multiplier { hi: 0x1b1ae4d6, lo: 0xe2ef5000 },
        Multiplier { hi: 0x10f0cf06, lo: 0x4dd59200 },
        Multiplier { hi: 0x152d02c7, lo: 0xe14af680 },
        Multiplier { hi: 0x1a784379, lo: 0xd99db420 },
        Multiplier { hi: 0x108b2a2c, lo: 0x28029094 },
        Multiplier { hi: 0x14adf4b7, lo: 0x320334b9 },
        Multiplier { hi: 0x19d971e4, lo: 0xfe8401e7 },
        Multiplier { hi: 0x1027e72f, lo: 0x1f128130 },
        Multiplier { hi: 0x1431e0fa, lo: 0xe6d7217c },
        Multiplier { hi: 0x193e5939, lo: 0xa08ce9db },
        Multiplier { hi: 0x1f8def88, lo: 0x08b02452 },
        Multiplier { hi: 0x13b8b5b5, lo: 0x056e16b3 },
        Multiplier { hi: 0x18a6e322, lo: 0x46c99c60 },
        Multiplier { hi: 0x1ed09bea, lo: 0xd87c0378 },
        Multiplier { hi: 0x13426172, lo: 0xc74d822b },
        Multiplier { hi: 0x1812f9cf, lo: 0x7920e2b6 },
        Multiplier { hi: 0x1e17b843, lo: 0x57691b64 },
        Multiplier { hi: 0x12ced32a, lo: 0x16a1b11e },
        Multiplier { hi: 0x178287f4, lo: 0x9c4a1d66 },
        Multiplier { hi: 0x1d6329f1, lo: 0xc35ca4bf },
        Multiplier { hi: 0x125dfa37, lo: 0x1a19e6f7 },
        Multiplier { hi: 0x16f578c4, lo: 0xe0a060b5 },
        Multiplier { hi: 0x1cb2d6f6, lo: 0x18c878e3 },
        Multiplier { hi: 0x11efc659, lo: 0xcf7d4b8d },
        Multiplier { hi: 0x166bb7f0, lo: 0x435c9e71 },
        Multiplier { hi: 0x1c06a5ec, lo: 0x5433c60d },
        Multiplier { hi: 0x118427b3, lo: 0xb4a05bc8 },
    ]);
}

/// Tables for `f64`.
pub mod b64 {
    use super::*;

    pub const POW5_INV_BITCOUNT: i32 = 125;
    pub const POW5_BITCOUNT: i32 = 125;

    /// Indexed by `-e10` when parsing, and by `q = log10(2^e2)` when formatting.
    pub static POW5_INV_SPLIT: Multipliers<u64, 343> = Multipliers::new([
        Multiplier { hi: 0x2000000000000000, lo: 0x0000000000000001 },
        Multiplier { hi: 0x1999999999999999, lo: 0x999999999999999a },
        Multiplier { hi: 0x147ae147ae147ae1, lo: 0x47ae147ae147ae15 },
        Multiplier { hi: 0x10624dd2f1a9fbe7, lo: 0x6c8b4395810624de },
        Multiplier { hi: 0x1a36e2eb1c432ca5, lo: 0x7a786c226809d496 },
        Multiplier { hi: 0x14f8b588e368f084, lo: 0x61f9f01b866e43ab },
        Multiplier { hi: 0x10c6f7a0b5ed8d36, lo: 0xb4c7f34938583622 },
        Multiplier { hi: 0x1ad7f29abcaf4857, lo: 0x87a6520ec08d236a },
        Multiplier { hi: 0x15798ee2308c39df, lo: 0x9fb841a566d74f88 },
        Multiplier { hi: 0x112e0be826d694b2, lo: 0xe62d01511f12a607 },
        Multiplier { hi: 0x1b7cdfd9d7bdbab7, lo: 0xd6ae6881cb5109a4 },
        Multiplier { hi: 0x15fd7fe17964955f, lo: 0xdef1ed34a2a73aea },
        Multiplier { hi: 0x119799812dea1119, lo: 0x7f27f0f6e885c8bb },
        Multiplier { hi: 0x1c25c268497681c2, lo: 0x650cb4be40d60df8 },
        Multiplier { hi: 0x16849b86a12b9b01, lo: 0xea70909833de7193 },
        Multiplier { hi: 0x1203af9ee756159b, lo: 0x21f3a6e0297ec143 },
        Multiplier { hi: 0x1cd2b297d889bc2b, lo: 0x6985d7cd0f313537 },
        Multiplier { hi: 0x170ef54646d49689, lo: 0x2137dfd73f5a90f9 },
        Multiplier { hi: 0x12725dd1d243aba0, lo: 0xe75fe645cc4873fa },
        Multiplier { hi: 0x1d83c94fb6d2ac34, lo: 0xa5663d3c7a0d865d },
        Multiplier { hi: 0x179ca10c9242235d, lo: 0x511e976394d79eb1 },
        Multiplier { hi: 0x12e3b40a0e9b4f7d, lo: 0xda7edf82dd794bc1 },
        Multiplier { hi: 0x1e392010175ee596, lo: 0x2a6498d1625bac68 },
        Multiplier { hi: 0x182db34012b25144, lo: 0xeeb6e0a781e2f053 },
        Multiplier { hi: 0x1357c299a88ea76a, lo: 0x58924d52ce4f26a9 },
        Multiplier { hi: 0x1ef2d0f5da7dd8aa, lo: 0x27507bb7b07ea441 },
        Multiplier { hi: 0x18c240c4aecb13bb, lo: 0x52a6c95fc0655034 },
        Multiplier { hi: 0x13ce9a36f23c0fc9, lo: 0x0eebd44c99eaa690 },
        Multiplier { hi: 0x1fb0f6be50601941, lo: 0xb17953adc3110a80 },
        Multiplier { hi: 0x195a5efea6b34767, lo: 0xc12ddc8b02740867 },
        Multiplier { hi: 0x14484bfeebc29f86, lo: 0x3424b06f3529a052 },
        Multiplier { hi: 0x1039d66589687f9e, lo: 0x901d59f290ee19db },
        Multiplier { hi: 0x19f623d5a8a73297, lo: 0x4cfbc31db4b0295f },
        Multiplier { hi: 0x14c4e977ba1f5bac, lo: 0x3d9635b15d59bab2 },
        Multiplier { hi: 0x109d8792fb4c4956, lo: 0x97ab5e277de16228 },
        Multiplier { hi: 0x1a95a5b7f87a0ef0, lo: 0xf2abc9d8c9689d0d },
        Multiplier { hi: 0x154484932d2e725a, lo: 0x5bbca17a3aba173e },
        Multiplier { hi: 0x11039d428a8b8eae, lo: 0xafca1ac82efb45cb },
        Multiplier { hi: 0x1b38fb9daa78e44a, lo: 0xb2dcf7a6b1920945 },
        Multiplier { hi: 0x15c72fb1552d836e, lo: 0xf57d92ebc141a104 },
        Multiplier { hi: 0x116c262777579c58, lo: 0xc46475896767b403 },
        Multiplier { hi: 0x1be03d0bf225c6f4, lo: 0x6d6d88dbd8a5ecd2 },
        Multiplier { hi: 0x164cfda3281e38c3, lo: 0x8abe071646eb23db },
        Multiplier { hi: 0x11d7314f534b609c, lo: 0x6efe6c11d255b649 },
        Multiplier { hi: 0x1c8b821885456760, lo: 0xb197134fb6ef8a0e },
        Multiplier { hi: 0x16d601ad376ab91a, lo: 0x27ac0f72f8bfa1a5 },
        Multiplier { hi: 0x1244ce242c5560e1, lo: 0xb95672c260994e1e },
        Multiplier { hi: 0x1d3ae36d13bbce35, lo: 0xf5571e03cdc21695 },
        Multiplier { hi: 0x17624f8a762fd82b, lo: 0x2aac18030b01abab },
        Multiplier { hi: 0x12b50c6ec4f31355, lo: 0xbbbce0026f348956 },
        Multiplier { hi: 0x1dee7a4ad4b81eef, lo: 0x92c7ccd0b1eda889 },
        Multiplier { hi: 0x17f1fb6f10934bf2, lo: 0xdbd30a408e57ba07 },
        Multiplier { hi: 0x1327fc58da0f6ff5, lo: 0x7ca8d50071dfc806 },
        Multiplier { hi: 0x1ea6608e29b24cbb, lo: 0xfaa7bb33e9660cd6 },
        Multiplier { hi: 0x18851a0b548ea3c9, lo: 0x9552fc298784d711 },
        Multiplier { hi: 0x139dae6f76d88307, lo: 0xaaa8c9bad2d0ac0e },
        Multiplier { hi: 0x1f62b0b257c0d1a5, lo: 0xdddadc5e1e1aace3 },
        Multiplier { hi: 0x191bc08eac9a4151, lo: 0x7e48b04b4b488a4f },
        Multiplier { hi: 0x141633a556e1cdda, lo: 0xcb6d59d5d5d3a1d9 },
        Multiplier { hi: 0x1011c2eaabe7d7e2, lo: 0x3c577b1177dc817b },
        Multiplier { hi: 0x19b604aaaca62636, lo: 0xc6f25e825960cf2a },
        Multiplier { hi: 0x14919d5556eb51c5, lo: 0x6bf518684780a5bb },
        Multiplier { hi: 0x10747ddddf22a7d1, lo: 0x232a79ed06008496 },
        Multiplier { hi: 0x1a53fc9631d10c81, lo: 0xd1dd8fe1a3340756 },
        Multiplier { hi: 0x150ffd44f4a73d34, lo: 0xa7e4731ae8f66c45 },
        Multiplier { hi: 0x10d9976a5d52975d, lo: 0x531d28e253f8569e },
        Multiplier { hi: 0x1af5bf109550f22e, lo: 0xeb61db03b98d5762 },
        Multiplier { hi: 0x159165a6ddda5b58, lo: 0xbc4e48cfc7a445e8 },
        Multiplier { hi: 0x11411e1f17e1e2ad, lo: 0x6371d3d96c836b20 },
        Multiplier { hi: 0x1b9b6364f3030448, lo: 0x9f1c8628ad9f11cd },
        Multiplier { hi: 0x1615e91d8f359d06, lo: 0xe5b06b53be18db0b },
        Multiplier { hi: 0x11ab20e472914a6b, lo: 0xeaf3890fcb4715a2 },
        Multiplier { hi: 0x1c45016d841baa46, lo: 0x44b8db4c7871bc37 },
        Multiplier { hi: 0x169d9abe03495505, lo: 0x03c715d6c6c1635f },
        Multiplier { hi: 0x1217aefe69077737, lo: 0x3638de456bcde919 },
        Multiplier { hi: 0x1cf2b1970e725858, lo: 0x56c163a2461641c1 },
        Multiplier { hi: 0x17288e1271f51379, lo: 0xdf011c81d1ab67ce },
        Multiplier { hi: 0x1286d80ec190dc61, lo: 0x7f3416ce4155eca5 },
        Multiplier { hi: 0x1da48ce468e7c702, lo: 0x6520247d3556476e },
        Multiplier { hi: 0x17b6d71d20b96c01, lo: 0xea801d30f7783925 },
        Multiplier { hi: 0x12f8ac174d612334, lo: 0xbb99b0f3f92cfa84 },
        Multiplier { hi: 0x1e5aacf215683854, lo: 0x5f5c4e532847f739 },
        Multiplier { hi: 0x18488a5b44536043, lo: 0x7f7d0b75b9d32c2e },
        Multiplier { hi: 0x136d3b7c36a919cf, lo: 0x9930d5f7c7dc2358 },
        Multiplier { hi: 0x1f152bf9f10e8fb2, lo: 0x8eb4898c72f9d226 },
        Multiplier { hi: 0x18ddbcc7f40ba628, lo: 0x722a07a38f2e41b8 },
        Multiplier { hi: 0x13e497065cd61e86, lo: 0xc1bb394fa5be9afa },
        Multiplier { hi: 0x1fd424d6faf030d7, lo: 0x9c5ec2190930f7f6 },
        Multiplier { hi: 0x197683df2f268d79, lo: 0x49e56814075a5ff8 },
        Multiplier { hi: 0x145ecfe5bf520ac7, lo: 0x6e51201005e1e660 },
        Multiplier { hi: 0x104bd984990e6f05, lo: 0xf1da800cd181851a },
        Multiplier { hi: 0x1a12f5a0f4e3e4d6, lo: 0x4fc400148268d4f5 },
        Multiplier { hi: 0x14dbf7b3f71cb711, lo: 0xd96999aa01ed772b },
        Multiplier { hi: 0x10aff95cc5b09274, lo: 0xadee1488018ac5bc },
        Multiplier { hi: 0x1ab328946f80ea54, lo: 0x497ceda668de092c },
        Multiplier { hi: 0x155c2076bf9a5510, lo: 0x3aca57b853e4d424 },
        Multiplier { hi: 0x1116805effaeaa73, lo: 0x623b7960431d7683 },
        Multiplier { hi: 0x1b5733cb32b110b8, lo: 0x9d2bf566d1c8bd9e },
        Multiplier { hi: 0x15df5ca28ef40d60, lo: 0x7dbcc452416d647f },
        Multiplier { hi: 0x117f7d4ed8c33de6, lo: 0xcafd69db678ab6cc },
        Multiplier { hi: 0x1bff2ee48e052fd7, lo: 0xab2f0fc572778adf },
        Multiplier { hi: 0x1665bf1d3e6a8cac, lo: 0x88f273045b92d580 },
        Multiplier { hi: 0x11eaff4a98553d56, lo: 0xd3f528d049424466 },
        Multiplier { hi: 0x1cab3210f3bb9557, lo: 0xb988414d4203a0a3 },
        Multiplier { hi: 0x16ef5b40c2fc7779, lo: 0x6139cdd76802e6e9 },
        Multiplier { hi: 0x125915cd68c9f92d, lo: 0xe761717920025254 },
        Multiplier { hi: 0x1d5b561574765b7c, lo: 0xa568b58e999d5086 },
        Multiplier { hi: 0x177c44ddf6c515fd, lo: 0x5120913ee14aa6d2 },
        Multiplier { hi: 0x12c9d0b1923744ca, lo: 0xa74d40ff1aa21f0e },
        Multiplier { hi: 0x1e0fb44f50586e11, lo: 0x0baece64f769cb4a },
        Multiplier { hi: 0x180c903f7379f1a7, lo: 0x3c8bd850c5ee3c3b },
        Multiplier { hi: 0x133d4032c2c7f485, lo: 0xca0979da37f1c9c9 },
        Multiplier { hi: 0x1ec866b79e0cba6f, lo: 0xa9a8c2f6bfe942db },
        Multiplier { hi: 0x18a0522c7e709526, lo: 0x2153cf2bccba9be3 },
        Multiplier { hi: 0x13b374f06526ddb8, lo: 0x1aa9728970954982 },
        Multiplier { hi: 0x1f8587e7083e2f8c, lo: 0xf775840f1a88759d },
        Multiplier { hi: 0x19379fec0698260a, lo: 0x5f9136727ba05e17 },
        Multiplier { hi: 0x142c7ff0054684d5, lo: 0x1940f85b9619e4df },
        Multiplier { hi: 0x1023998cd1053710, lo: 0xe100c6afab47ea4c },
        Multiplier { hi: 0x19d28f47b4d524e7, lo: 0xce67a44c453fdd47 },
        Multiplier { hi: 0x14a8729fc3ddb71f, lo: 0xd852e9d69dccb106 },
        Multiplier { hi: 0x1086c219697e2c19, lo: 0x79dbee454b0a2738 },
        Multiplier { hi: 0x1a71368f0f30468f, lo: 0x295fe3a211a9d859 },
        Multiplier { hi: 0x15275ed8d8f36ba5, lo: 0xbab31c81a7bb137a },
        Multiplier { hi: 0x10ec4be0ad8f8951, lo: 0x6228e39aec95a92f },
        Multiplier { hi: 0x1b13ac9aaf4c0ee8, lo: 0x9d0e38f7e0ef7517 },
        Multiplier { hi: 0x15a956e225d67253, lo: 0xb0d82d931a592a79 },
        Multiplier { hi: 0x11544581b7dec1dc, lo: 0x8d79be0f4847552e },
        Multiplier { hi: 0x1bba08cf8c979c94, lo: 0x158f967eda0bbb7c },
        Multiplier { hi: 0x162e6d72d6dfb076, lo: 0x77a611ff14d62f97 },
        Multiplier { hi: 0x11bebdf578b2f391, lo: 0xf951a7ff43de8c79 },
        Multiplier { hi: 0x1c6463225ab7ec1c, lo: 0xc21c3ffed2fdad8e },
        Multiplier { hi: 0x16b6b5b5155ff017, lo: 0x01b0333242648ad8 },
        Multiplier { hi: 0x122bc490dde659ac, lo: 0x0159c28e9b83a246 },
        Multiplier { hi: 0x1d12d41afca3c2ac, lo: 0xcef604175f3903a3 },
        Multiplier { hi: 0x17424348ca1c9bbd, lo: 0x725e69ac4c2d9c83 },
        Multiplier { hi: 0x129b69070816e2fd, lo: 0xf5185489d68ae39c },
        Multiplier { hi: 0x1dc574d80cf16b2f, lo: 0xee8d540fbdab05c6 },
        Multiplier { hi: 0x17d12a4670c1228c, lo: 0xbed77672fe226b05 },
        Multiplier { hi: 0x130dbb6b8d674ed6, lo: 0xff12c528cb4ebc04 },
        Multiplier { hi: 0x1e7c5f127bd87e24, lo: 0xcb513b74787df9a0 },
        Multiplier { hi: 0x18637f41fcad31b7, lo: 0x090dc929f9fe614d },
        Multiplier { hi: 0x1382cc34ca2427c5, lo: 0xa0d7d42194cb810a },
        Multiplier { hi: 0x1f37ad21436d0c6f, lo: 0x67bfb9cf5478ce77 },
        Multiplier { hi: 0x18f9574dcf8a7059, lo: 0x1fcc94a5dd2d71f9 },
        Multiplier { hi: 0x13faac3e3fa1f37a, lo: 0x7fd6dd517dbdf4c7 },
        Multiplier { hi: 0x1ff779fd329cb8c3, lo: 0xffbe2ee8c92fee0b },
        Multiplier { hi: 0x1992c7fdc216fa36, lo: 0x6631bf20a0f324d6 },
        Multiplier { hi: 0x14756ccb01abfb5e, lo: 0xb827cc1a1a5c1d78 },
        Multiplier { hi: 0x105df0a267bcc918, lo: 0x935309ae7b7ce460 },
        Multiplier { hi: 0x1a2fe76a3f9474f4, lo: 0x1eeb42b0c594a099 },
        Multiplier { hi: 0x14f31f8832dd2a5c, lo: 0xe58902270476e6e1 },
        Multiplier { hi: 0x10c27fa028b0eeb0, lo: 0xb7a0ce859d2bebe7 },
        Multiplier { hi: 0x1ad0cc33744e4ab4, lo: 0x59014a6f61dfdfd8 },
        Multiplier { hi: 0x1573d68f903ea229, lo: 0xe0cdd525e7e64cad },
        Multiplier { hi: 0x11297872d9cbb4ee, lo: 0x4d7177518651d6f1 },
        Multiplier { hi: 0x1b758d848fac54b0, lo: 0x7be8bee8d6e957e8 },
        Multiplier { hi: 0x15f7a46a0c89dd59, lo: 0xfcba3253df211320 },
        Multiplier { hi: 0x1192e9ee706e4aae, lo: 0x63c8284318e74280 },
        Multiplier { hi: 0x1c1e43171a4a1117, lo: 0x060d0d3827d86a66 },
        Multiplier { hi: 0x167e9c127b6e7412, lo: 0x6b3da42cecad21eb },
        Multiplier { hi: 0x11fee341fc585cdb, lo: 0x88fe1cf0bd574e56 },
        Multiplier { hi: 0x1ccb0536608d615f, lo: 0x419694b462254a23 },
        Multiplier { hi: 0x1708d0f84d3de77f, lo: 0x67abaa29e81dd4e9 },
        Multiplier { hi: 0x126d73f9d764b932, lo: 0xb95621bb2017dd87 },
        Multiplier { hi: 0x1d7becc2f23ac1ea, lo: 0xc223692b668c95a5 },
        Multiplier { hi: 0x179657025b6234bb, lo: 0xce82ba891ed6de1d },
        Multiplier { hi: 0x12deac01e2b4f6fc, lo: 0xa53562074bdf1818 },
        Multiplier { hi: 0x1e3113363787f194, lo: 0x3b889cd87964f359 },
        Multiplier { hi: 0x18274291c6065adc, lo: 0xfc6d4a46c783f5e1 },
        Multiplier { hi: 0x13529ba7d19eaf17, lo: 0x30576e9f06032b1a },
        Multiplier { hi: 0x1eea92a61c311825, lo: 0x1a257dcb3cd1de90 },
        Multiplier { hi: 0x18bba884e35a79b7, lo: 0x481dfe3c30a7e540 },
        Multiplier { hi: 0x13c9539d82aec7c5, lo: 0xd34b31c9c0865100 },
        Multiplier { hi: 0x1fa885c8d117a609, lo: 0x5211e942cda3b4cd },
        Multiplier { hi: 0x19539e3a40dfb807, lo: 0x74db21023e1c90a4 },
        Multiplier { hi: 0x1442e4fb67196005, lo: 0xf715b401cb4a0d50 },
        Multiplier { hi: 0x103583fc527ab337, lo: 0xf8de299b09080aa7 },
        Multiplier { hi: 0x19ef3993b72ab859, lo: 0x8e304291a80cddd7 },
        Multiplier { hi: 0x14bf6142f8eef9e1, lo: 0x3e8d020e200a4b13 },
        Multiplier { hi: 0x10991a9bfa58c7e7, lo: 0x653d9b3e80083c0f },
        Multiplier { hi: 0x1a8e90f9908e0ca5, lo: 0x6ec8f864000d2ce4 },
        Multiplier { hi: 0x153eda614071a3b7, lo: 0x8bd3f9e999a423ea },
        Multiplier { hi: 0x10ff151a99f482f9, lo: 0x3ca994bae1501cbb },
        Multiplier { hi: 0x1b31bb5dc320d18e, lo: 0xc775bac49bb3612b },
        Multiplier { hi: 0x15c162b168e70e0b, lo: 0xd2c4956a16291a89 },
        Multiplier { hi: 0x11678227871f3e6f, lo: 0xdbd0778811ba7ba1 },
        Multiplier { hi: 0x1bd8d03f3e9863e6, lo: 0x2c80bf401c5d929b },
        Multiplier { hi: 0x16470cff6546b651, lo: 0xbd33cc3349e47549 },
        Multiplier { hi: 0x11d270cc51055ea7, lo: 0xca8fd68f6e505dd4 },
        Multiplier { hi: 0x1c83e7ad4e6efdd9, lo: 0x4419574be3b3c953 },
        Multiplier { hi: 0x16cfec8aa52597e1, lo: 0x0347790982f63aa9 },
        Multiplier { hi: 0x123ff06eea847980, lo: 0xcf6c60d468c4fbba },
        Multiplier { hi: 0x1d331a4b10d3f59a, lo: 0xe57a34870e07f92a },
        Multiplier { hi: 0x175c1508da432ae2, lo: 0x512e906c0b399422 },
        Multiplier { hi: 0x12b010d3e1cf5581, lo: 0xda8ba6bcd5c7a9b5 },
        Multiplier { hi: 0x1de6815302e5559c, lo: 0x90df712e22d90f87 },
        Multiplier { hi: 0x17eb9aa8cf1dde16, lo: 0xda4c5a8b4f140c6c },
        Multiplier { hi: 0x1322e220a5b17e78, lo: 0xaea37ba2a5a9a38a },
        Multiplier { hi: 0x1e9e369aa2b59727, lo: 0x7dd25f6aa2a905a9 },
        Multiplier { hi: 0x187e92154ef7ac1f, lo: 0x97db7f888220d154 },
        Multiplier { hi: 0x139874ddd8c6234c, lo: 0x797c6606ce80a777 },
        Multiplier { hi: 0x1f5a549627a36bad, lo: 0x8f2d700ae4010bf1 },
        Multiplier { hi: 0x191510781fb5efbe, lo: 0x0c2459a25000d65a },
        Multiplier { hi: 0x1410d9f9b2f7f2fe, lo: 0x701d1481d99a4515 },
        Multiplier { hi: 0x100d7b2e28c65bfe, lo: 0xc017439b147b6a77 },
        Multiplier { hi: 0x19af2b7d0e0a2cca, lo: 0xccf205c4ed9243f2 },
        Multiplier { hi: 0x148c22ca71a1bd6f, lo: 0x0a5b37d0be0e9cc2 },
        Multiplier { hi: 0x10701bd527b4978c, lo: 0x0848f973cb3ee3ce },
        Multiplier { hi: 0x1a4cf9550c5425ac, lo: 0xda0e5bec78649fb0 },
        Multiplier { hi: 0x150a6110d6a9b7bd, lo: 0x7b3eaff060507fc0 },
        Multiplier { hi: 0x10d51a73deee2c97, lo: 0x95cbbff380406633 },
        Multiplier { hi: 0x1aee90b964b04758, lo: 0xefac665266cd7052 },
        Multiplier { hi: 0x158ba6fab6f36c47, lo: 0x2623850eb8a459db },
        Multiplier { hi: 0x113c85955f29236c, lo: 0x1e82d0d893b6ae49 },
        Multiplier { hi: 0x1b9408eefea838ac, lo: 0xfd9e1af41f8ab075 },
        Multiplier { hi: 0x16100725988693bd, lo: 0x97b1af29b2d559f7 },
        Multiplier { hi: 0x11a66c1e139edc97, lo: 0xac8e25baf5777b2c },
        Multiplier { hi: 0x1c3d79c9b8fe2dbf, lo: 0x7a7d092b2258c513 },
        Multiplier { hi: 0x169794a160cb57cc, lo: 0x61fda0ef4ead6a76 },
        Multiplier { hi: 0x1212dd4de7091309, lo: 0xe7fe1a590bbdeec5 },
        Multiplier { hi: 0x1ceafbafd80e84dc, lo: 0xa6635d5b45fcb13a },
        Multiplier { hi: 0x172262f3133ed0b0, lo: 0x851c4aaf6b308dc8 },
        Multiplier { hi: 0x1281e8c275cbda26, lo: 0xd0e36ef2bc26d7d4 },
        Multiplier { hi: 0x1d9ca79d894629d7, lo: 0xb49f17eac6a48c86 },
        Multiplier { hi: 0x17b08617a104ee46, lo: 0x2a18dfef0550706b },
        Multiplier { hi: 0x12f39e794d9d8b6b, lo: 0x54e0b3259dd9f389 },
        Multiplier { hi: 0x1e5297287c2f4578, lo: 0x87cdeb6f62f65274 },
        Multiplier { hi: 0x18421286c9bf6ac6, lo: 0xd30b22bf825ea85d },
        Multiplier { hi: 0x13680ed23aff889f, lo: 0x0f3c1bcc684bb9e4 },
        Multiplier { hi: 0x1f0ce4839198da98, lo: 0x18602c7a4079296d },
        Multiplier { hi: 0x18d71d360e13e213, lo: 0x46b356c833942124 },
        Multiplier { hi: 0x13df4a91a4dcb4dc, lo: 0x388f78a029434db6 },
        Multiplier { hi: 0x1fcbaa82a1612160, lo: 0x5a7f2766a86baf8a },
        Multiplier { hi: 0x196fbb9bb44db44d, lo: 0x153285ebb9efbfa2 },
        Multiplier { hi: 0x145962e2f6a4903d, lo: 0xaa8ed189618c994e },
        Multiplier { hi: 0x1047824f2bb6d9ca, lo: 0xeed8a7a11ad6e10c },
        Multiplier { hi: 0x1a0c03b1df8af611, lo: 0x7e27729b5e249b45 },
        Multiplier { hi: 0x14d6695b193bf80d, lo: 0xfe85f549181d4904 },
        Multiplier { hi: 0x10ab877c142ff9a4, lo: 0xcb9e5dd4134aa0d0 },
        Multiplier { hi: 0x1aac0bf9b9e65c3a, lo: 0xdf63c9535211014d },
        Multiplier { hi: 0x15566ffafb1eb02f, lo: 0x191ca10f74da6771 },
        Multiplier { hi: 0x1111f32f2f4bc025, lo: 0xadb080d92a4852c1 },
        Multiplier { hi: 0x1b4feb7eb212cd09, lo: 0x15e7348eaa0d5134 },
        Multiplier { hi: 0x15d98932280f0a6d, lo: 0xab1f5d3eee710dc4 },
        Multiplier { hi: 0x117ad428200c0857, lo: 0xbc1917658b8da49d },
        Multiplier { hi: 0x1bf7b9d9cce00d59, lo: 0x2cf4f23c127c3a94 },
        Multiplier { hi: 0x165fc7e170b33de0, lo: 0xf0c3f4fcdb969543 },
        Multiplier { hi: 0x11e6398126f5cb1a, lo: 0x5a365d9716121103 },
        Multiplier { hi: 0x1ca38f350b22de90, lo: 0x9056fc24f01ce804 },
        Multiplier { hi: 0x16e93f5da2824ba6, lo: 0xd9df301d8ce3ecd0 },
        Multiplier { hi: 0x125432b14ecea2eb, lo: 0xe17f59b13d8323da },
        Multiplier { hi: 0x1d53844ee47dd179, lo: 0x68cbc2b52f38395c },
        Multiplier { hi: 0x177603725064a794, lo: 0x53d6355dbf602de3 },
        Multiplier { hi: 0x12c4cf8ea6b6ec76, lo: 0xa9782ab165e68b1c },
        Multiplier { hi: 0x1e07b27dd78b13f1, lo: 0x0f26aab56fd744fa },
        Multiplier { hi: 0x18062864ac6f4327, lo: 0x3f52222abfdf6a62 },
        Multiplier { hi: 0x1338205089f29c1f, lo: 0x65db4e88997f884e },
        Multiplier { hi: 0x1ec033b40fea9365, lo: 0x6fc54a7428cc0d4a },
        Multiplier { hi: 0x1899c2f673220f84, lo: 0x596aa1f68709a43b },
        Multiplier { hi: 0x13ae3591f5b4d936, lo: 0xadeee7f86c07b696 },
        Multiplier { hi: 0x1f7d228322baf524, lo: 0x497e3ff3e00c5756 },
        Multiplier { hi: 0x1930e868e89590e9, lo: 0xd464fff64cd6ac45 },
        Multiplier { hi: 0x14272053ed4473ee, lo: 0x4383fff83d7889d1 },
        Multiplier { hi: 0x101f4d0ff1038ff1, lo: 0xcf9cccc69793a174 },
        Multiplier { hi: 0x19cbae7fe805b31c, lo: 0x7f6147a425b90252 },
        Multiplier { hi: 0x14a2f1ffecd15c16, lo: 0xcc4dd2e9b7c7350f },
        Multiplier { hi: 0x10825b3323dab012, lo: 0x3d0b0f215fd290d9 },
        Multiplier { hi: 0x1a6a2b85062ab350, lo: 0x61ab4b689950e7c1 },
        Multiplier { hi: 0x1521bc6a6b555c40, lo: 0x4e22a2ba1440b967 },
        Multiplier { hi: 0x10e7c9eebc4449cd, lo: 0x0b4ee894dd009453 },
        Multiplier { hi: 0x1b0c764ac6d3a948, lo: 0x1217da87c800ed51 },
        Multiplier { hi: 0x15a391d56bdc876c, lo: 0xdb46486ca000bdda },
        Multiplier { hi: 0x114fa7ddefe39f8a, lo: 0x490506bd4ccd64af },
        Multiplier { hi: 0x1bb2a62fe638ff43, lo: 0xa8080ac87ae23ab1 },
        Multiplier { hi: 0x162884f31e93ff69, lo: 0x5339a239fbe82ef4 },
        Multiplier { hi: 0x11ba03f5b20fff87, lo: 0x75c7b4fb2fecf25d },
        Multiplier { hi: 0x1c5cd322b67fff3f, lo: 0x22d92191e647ea2e },
        Multiplier { hi: 0x16b0a8e891ffff65, lo: 0xb57a8141850654f2 },
        Multiplier { hi: 0x1226ed86db3332b7, lo: 0xc4620101373843f5 },
        Multiplier { hi: 0x1d0b15a491eb8459, lo: 0x3a366801f1f39fee },
        Multiplier { hi: 0x173c115074bc69e0, lo: 0xfb5eb99b27f6198b },
        Multiplier { hi: 0x129674405d6387e7, lo: 0x2f7efae2865e7ad6 },
        Multiplier { hi: 0x1dbd86cd6238d971, lo: 0xe597f7d0d6fd9156 },
        Multiplier { hi: 0x17cad23de82d7ac1, lo: 0x8479930d78cadaab },
        Multiplier { hi: 0x1308a831868ac89a, lo: 0xd06142712d6f1556 },
        Multiplier { hi: 0x1e74404f3daada91, lo: 0x4d686a4eaf182222 },
        Multiplier { hi: 0x185d003f6488aeda, lo: 0xa453883ef279b4e8 },
        Multiplier { hi: 0x137d99cc506d58ae, lo: 0xe9dc6cff28615d87 },
        Multiplier { hi: 0x1f2f5c7a1a488de4, lo: 0xa960ae650d6895a4 },
        Multiplier { hi: 0x18f2b061aea07183, lo: 0xbab3beb73ded4483 },
        Multiplier { hi: 0x13f559e7bee6c136, lo: 0x2ef6322c318a9d36 },
        Multiplier { hi: 0x1feef63f97d79b89, lo: 0xe4bd1d13827761f0 },
        Multiplier { hi: 0x198bf832dfdfafa1, lo: 0x83ca7da9352c4e5a },
        Multiplier { hi: 0x146ff9c24cb2f2e7, lo: 0x9ca1fe20f756a515 },
        Multiplier { hi: 0x1059949b708f28b9, lo: 0x4a1b31b3f9121daa },
        Multiplier { hi: 0x1a28edc580e50df5, lo: 0x435eb5ecc1b695dd },
        Multiplier { hi: 0x14ed8b04671da4c4, lo: 0x35e55e57015ede4a },
        Multiplier { hi: 0x10be08d0527e1d69, lo: 0xc4b77eac0118b1d5 },
        Multiplier { hi: 0x1ac9a7b3b7302f0f, lo: 0xa12597799b5ab622 },
        Multiplier { hi: 0x156e1fc2f8f358d9, lo: 0x4db7ac6149155e81 },
        Multiplier { hi: 0x1124e63593f5e0ad, lo: 0xd7c6238107444b9b },
        Multiplier { hi: 0x1b6e3d2286563449, lo: 0x593d059b3ed3ac2b },
        Multiplier { hi: 0x15f1ca820511c36d, lo: 0xe0fd9e15cbdc89bc },
        Multiplier { hi: 0x118e3b9b37416924, lo: 0xb3fe18116fe3a163 },
        Multiplier { hi: 0x1c16c5c525357507, lo: 0x866359b57fd29bd1 },
        Multiplier { hi: 0x16789e3750f790d2, lo: 0xd1e91491330ee30e },
        Multiplier { hi: 0x11fa182c40c60d75, lo: 0x74ba76da8f3f1c0b },
        Multiplier { hi: 0x1cc359e067a348bb, lo: 0xedf72490e531c678 },
        Multiplier { hi: 0x1702ae4d1fb5d3c9, lo: 0x8b2c1d40b75b052d },
        Multiplier { hi: 0x12688b70e62b0fd4, lo: 0x6f567dcd5f7c0424 },
        Multiplier { hi: 0x1d74124e3d11b2ed, lo: 0x7ef0c94898c66d06 },
        Multiplier { hi: 0x17900ea4fda7c257, lo: 0x98c0a106e09ebd9f },
        Multiplier { hi: 0x12d9a550caec9b79, lo: 0x470080d24d4bcae6 },
        Multiplier { hi: 0x1e29088144adc58e, lo: 0xd800ce1d487944a2 },
        Multiplier { hi: 0x1820d39a9d57d13f, lo: 0x1333d8176d2dd082 },
        Multiplier { hi: 0x134d76154aaca765, lo: 0xa8f646792424a6ce },
        Multiplier { hi: 0x1ee25688777aa56f, lo: 0x74bd3d8ea03aa47d },
        Multiplier { hi: 0x18b51206c5fbb78c, lo: 0x5d64313ee6955064 },
        Multiplier { hi: 0x13c40e6bd1962c70, lo: 0x4ab68dcbebaaa6b7 },
        Multiplier { hi: 0x1fa01712e8f0471a, lo: 0x1124161312aaa457 },
        Multiplier { hi: 0x194cdf4253f36c14, lo: 0xda8344dc0eeee9df },
        Multiplier { hi: 0x143d7f6843292343, lo: 0xe2029d7cd8bf2180 },
        Multiplier { hi: 0x103132b9cf541c36, lo: 0x4e687dfd7a328133 },
        Multiplier { hi: 0x19e851294bb9c6bd, lo: 0x4a40c9959050ceb8 },
        Multiplier { hi: 0x14b9da876fc7d231, lo: 0x0833d477a6a70bc6 },
        Multiplier { hi: 0x1094aed2bfd30e8d, lo: 0xa02976c61eec096b },
        Multiplier { hi: 0x1a877e1dffb81749, lo: 0x004257a364acdbdf },
        Multiplier { hi: 0x153931b1996012a0, lo: 0xcd01dfb5ea23e319 },
        Multiplier { hi: 0x10fa8e27ade6754d, lo: 0x70ce4c91881cb5ae },
        Multiplier { hi: 0x1b2a7d0c4970bbaf, lo: 0x1ae3adb5a69455e2 },
        Multiplier { hi: 0x15bb973d078d62f2, lo: 0x7be957c4854377e8 },
        Multiplier { hi: 0x1162df64060ab58e, lo: 0xc987796a0435f987 },
        Multiplier { hi: 0x1bd1656cd67788e4, lo: 0x75a58f1006bcc271 },
        Multiplier { hi: 0x16411df0ab92d3e9, lo: 0xf7b7a5a66bca3527 },
        Multiplier { hi: 0x11cdb18d560f0fee, lo: 0x5fc61e1ebca1c41f },
        Multiplier { hi: 0x1c7c4f4889b1b316, lo: 0xffa363646102d365 },
        Multiplier { hi: 0x16c9d906d48e28df, lo: 0x32e91c504d9bdc51 },
        Multiplier { hi: 0x123b140576d820b2, lo: 0x8f20e37371497d0e },
        Multiplier { hi: 0x1d2b533bf159cdea, lo: 0x7e9b0585820f2e7c },
        Multiplier { hi: 0x1755dc2ff447d7ee, lo: 0xcbaf379e01a5beca },
        Multiplier { hi: 0x12ab168cc36cacbf, lo: 0x0958f94b348498a1 },
        Multiplier { hi: 0x1dde8a7ad2477acb, lo: 0x4227f54520d42768 },
    ]);

    /// Indexed by `e10` when parsing, and by `-e2 - log10(5^-e2)` (plus one) when formatting.
    pub static POW5_SPLIT: Multipliers<u64, 326> = Multipliers::new([
        Multiplier { hi: 0x1000000000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1400000000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1900000000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1f40000000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1388000000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x186a000000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1e84800000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1312d00000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x17d7840000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1dcd650000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x12a05f2000000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x174876e800000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1d1a94a200000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x12309ce540000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x16bcc41e90000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1c6bf52634000000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x11c37937e0800000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x16345785d8a00000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1bc16d674ec80000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1158e460913d0000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x15af1d78b58c4000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1b1ae4d6e2ef5000, lo: 0x0000000000000000 },
        Multiplier { hi: 0x10f0cf064dd59200, lo: 0x0000000000000000 },
        Multiplier { hi: 0x152d02c7e14af680, lo: 0x0000000000000000 },
        Multiplier { hi: 0x1a784379d99db420, lo: 0x0000000000000000 },
        Multiplier { hi: 0x108b2a2c28029094, lo: 0x0000000000000000 },
        Multiplier { hi: 0x14adf4b7320334b9, lo: 0x0000000000000000 },
        Multiplier { hi: 0x19d971e4fe8401e7, lo: 0x4000000000000000 },
        Multiplier { hi: 0x1027e72f1f128130, lo: 0x8800000000000000 },
        Multiplier { hi: 0x1431e0fae6d7217c, lo: 0xaa00000000000000 },
        Multiplier { hi: 0x193e5939a08ce9db, lo: 0xd480000000000000 },
        Multiplier { hi: 0x1f8def8808b02452, lo: 0xc9a0000000000000 },
        Multiplier { hi: 0x13b8b5b5056e16b3, lo: 0xbe04000000000000 },
        Multiplier { hi: 0x18a6e32246c99c60, lo: 0xad85000000000000 },
        Multiplier { hi: 0x1ed09bead87c0378, lo: 0xd8e6400000000000 },
        Multiplier { hi: 0x13426172c74d822b, lo: 0x878fe80000000000 },
        Multiplier { hi: 0x1812f9cf7920e2b6, lo: 0x6973e20000000000 },
        Multiplier { hi: 0x1e17b84357691b64, lo: 0x03d0da8000000000 },
        Multiplier { hi: 0x12ced32a16a1b11e, lo: 0x8262889000000000 },
        Multiplier { hi: 0x178287f49c4a1d66, lo: 0x22fb2ab400000000 },
        Multiplier { hi: 0x1d6329f1c35ca4bf, lo: 0xabb9f56100000000 },
        Multiplier { hi: 0x125dfa371a19e6f7, lo: 0xcb54395ca0000000 },
        Multiplier { hi: 0x16f578c4e0a060b5, lo: 0xbe2947b3c8000000 },
        Multiplier { hi: 0x1cb2d6f618c878e3, lo: 0x2db399a0ba000000 },
        Multiplier { hi: 0x11efc659cf7d4b8d, lo: 0xfc90400474400000 },
        Multiplier { hi: 0x166bb7f0435c9e71, lo: 0x7bb4500591500000 },
        Multiplier { hi: 0x1c06a5ec5433c60d, lo: 0xdaa16406f5a40000 },
        Multiplier { hi: 0x118427b3b4a05bc8, lo: 0xa8a4de8459868000 },
        Multiplier { hi: 0x15e531a0a1c872ba, lo: 0xd2ce16256fe82000 },
        Multiplier { hi: 0x1b5e7e08ca3a8f69, lo: 0x87819baecbe22800 },
        Multiplier { hi: 0x111b0ec57e6499a1, lo: 0xf4b1014d3f6d5900 },
        Multiplier { hi: 0x1561d276ddfdc00a, lo: 0x71dd41a08f48af40 },
        Multiplier { hi: 0x1aba4714957d300d, lo: 0x0e549208b31adb10 },
        Multiplier { hi: 0x10b46c6cdd6e3e08, lo: 0x28f4db456ff0c8ea },
        Multiplier { hi: 0x14e1878814c9cd8a, lo: 0x33321216cbecfb24 },
        Multiplier { hi: 0x1a19e96a19fc40ec, lo: 0xbffe969c7ee839ed },
        Multiplier { hi: 0x105031e2503da893, lo: 0xf7ff1e21cf512434 },
        Multiplier { hi: 0x14643e5ae44d12b8, lo: 0xf5fee5aa43256d41 },
        Multiplier { hi: 0x197d4df19d605767, lo: 0x337e9f14d3eec892 },
        Multiplier { hi: 0x1fdca16e04b86d41, lo: 0x005e46da08ea7ab6 },
        Multiplier { hi: 0x13e9e4e4c2f34448, lo: 0xa03aec4845928cb2 },
        Multiplier { hi: 0x18e45e1df3b0155a, lo: 0xc849a75a56f72fde },
        Multiplier { hi: 0x1f1d75a5709c1ab1, lo: 0x7a5c1130ecb4fbd6 },
        Multiplier { hi: 0x13726987666190ae, lo: 0xec798abe93f11d65 },
        Multiplier { hi: 0x184f03e93ff9f4da, lo: 0xa797ed6e38ed64bf },
        Multiplier { hi: 0x1e62c4e38ff87211, lo: 0x517de8c9c728bdef },
        Multiplier { hi: 0x12fdbb0e39fb474a, lo: 0xd2eeb17e1c7976b5 },
        Multiplier { hi: 0x17bd29d1c87a191d, lo: 0x87aa5ddda397d462 },
        Multiplier { hi: 0x1dac74463a989f64, lo: 0xe994f5550c7dc97b },
        Multiplier { hi: 0x128bc8abe49f639f, lo: 0x11fd195527ce9ded },
        Multiplier { hi: 0x172ebad6ddc73c86, lo: 0xd67c5faa71c24568 },
        Multiplier { hi: 0x1cfa698c95390ba8, lo: 0x8c1b77950e32d6c2 },
        Multiplier { hi: 0x121c81f7dd43a749, lo: 0x57912abd28dfc639 },
        Multiplier { hi: 0x16a3a275d494911b, lo: 0xad75756c7317b7c8 },
        Multiplier { hi: 0x1c4c8b1349b9b562, lo: 0x98d2d2c78fdda5ba },
        Multiplier { hi: 0x11afd6ec0e14115d, lo: 0x9f83c3bcb9ea8794 },
        Multiplier { hi: 0x161bcca7119915b5, lo: 0x0764b4abe8652979 },
        Multiplier { hi: 0x1ba2bfd0d5ff5b22, lo: 0x493de1d6e27e73d7 },
        Multiplier { hi: 0x1145b7e285bf98f5, lo: 0x6dc6ad264d8f0866 },
        Multiplier { hi: 0x159725db272f7f32, lo: 0xc938586fe0f2ca80 },
        Multiplier { hi: 0x1afcef51f0fb5eff, lo: 0x7b866e8bd92f7d20 },
        Multiplier { hi: 0x10de1593369d1b5f, lo: 0xad34051767bdae34 },
        Multiplier { hi: 0x15159af804446237, lo: 0x9881065d41ad19c1 },
        Multiplier { hi: 0x1a5b01b605557ac5, lo: 0x7ea147f492186032 },
        Multiplier { hi: 0x1078e111c3556cbb, lo: 0x6f24ccf8db4f3c1f },
        Multiplier { hi: 0x14971956342ac7ea, lo: 0x4aee003712230b27 },
        Multiplier { hi: 0x19bcdfabc13579e4, lo: 0xdda98044d6abcdf0 },
        Multiplier { hi: 0x10160bcb58c16c2f, lo: 0x0a89f02b062b60b6 },
        Multiplier { hi: 0x141b8ebe2ef1c73a, lo: 0xcd2c6c35c7b638e4 },
        Multiplier { hi: 0x1922726dbaae3909, lo: 0x8077874339a3c71d },
        Multiplier { hi: 0x1f6b0f092959c74b, lo: 0xe0956914080cb8e4 },
        Multiplier { hi: 0x13a2e965b9d81c8f, lo: 0x6c5d61ac8507f38e },
        Multiplier { hi: 0x188ba3bf284e23b3, lo: 0x4774ba17a649f072 },
        Multiplier { hi: 0x1eae8caef261aca0, lo: 0x1951e89d8fdc6c8f },
        Multiplier { hi: 0x132d17ed577d0be4, lo: 0x0fd3316279e9c3d9 },
        Multiplier { hi: 0x17f85de8ad5c4edd, lo: 0x13c7fdbb186434cf },
        Multiplier { hi: 0x1df67562d8b36294, lo: 0x58b9fd29de7d4203 },
        Multiplier { hi: 0x12ba095dc7701d9c, lo: 0xb7743e3a2b0e4942 },
        Multiplier { hi: 0x17688bb5394c2503, lo: 0xe5514dc8b5d1db92 },
        Multiplier { hi: 0x1d42aea2879f2e44, lo: 0xdea5a13ae3465277 },
        Multiplier { hi: 0x1249ad2594c37ceb, lo: 0x0b2784c4ce0bf38a },
        Multiplier { hi: 0x16dc186ef9f45c25, lo: 0xcdf165f6018ef06d },
        Multiplier { hi: 0x1c931e8ab871732f, lo: 0x416dbf7381f2ac88 },
        Multiplier { hi: 0x11dbf316b346e7fd, lo: 0x88e497a83137abd5 },
        Multiplier { hi: 0x1652efdc6018a1fc, lo: 0xeb1dbd923d8596ca },
        Multiplier { hi: 0x1be7abd3781eca7c, lo: 0x25e52cf6cce6fc7d },
        Multiplier { hi: 0x1170cb642b133e8d, lo: 0x97af3c1a40105dce },
        Multiplier { hi: 0x15ccfe3d35d80e30, lo: 0xfd9b0b20d0147542 },
        Multiplier { hi: 0x1b403dcc834e11bd, lo: 0x3d01cde904199292 },
        Multiplier { hi: 0x1108269fd210cb16, lo: 0x462120b1a28ffb9b },
        Multiplier { hi: 0x154a3047c694fddb, lo: 0xd7a968de0b33fa82 },
        Multiplier { hi: 0x1a9cbc59b83a3d52, lo: 0xcd93c3158e00f923 },
        Multiplier { hi: 0x10a1f5b813246653, lo: 0xc07c59ed78c09bb6 },
        Multiplier { hi: 0x14ca732617ed7fe8, lo: 0xb09b7068d6f0c2a3 },
        Multiplier { hi: 0x19fd0fef9de8dfe2, lo: 0xdcc24c830cacf34c },
        Multiplier { hi: 0x103e29f5c2b18bed, lo: 0xc9f96fd1e7ec180f },
        Multiplier { hi: 0x144db473335deee9, lo: 0x3c77cbc661e71e13 },
        Multiplier { hi: 0x1961219000356aa3, lo: 0x8b95beb7fa60e598 },
        Multiplier { hi: 0x1fb969f40042c54c, lo: 0x6e7b2e65f8f91efe },
        Multiplier { hi: 0x13d3e2388029bb4f, lo: 0xc50cfcffbb9bb35f },
        Multiplier { hi: 0x18c8dac6a0342a23, lo: 0xb6503c3faa82a037 },
        Multiplier { hi: 0x1efb1178484134ac, lo: 0xa3e44b4f95234844 },
        Multiplier { hi: 0x135ceaeb2d28c0eb, lo: 0xe66eaf11bd360d2b },
        Multiplier { hi: 0x183425a5f872f126, lo: 0xe00a5ad62c839075 },
        Multiplier { hi: 0x1e412f0f768fad70, lo: 0x980cf18bb7a47493 },
        Multiplier { hi: 0x12e8bd69aa19cc66, lo: 0x5f0816f752c6c8dc },
        Multiplier { hi: 0x17a2ecc414a03f7f, lo: 0xf6ca1cb527787b13 },
        Multiplier { hi: 0x1d8ba7f519c84f5f, lo: 0xf47ca3e2715699d7 },
        Multiplier { hi: 0x127748f9301d319b, lo: 0xf8cde66d86d62026 },
        Multiplier { hi: 0x17151b377c247e02, lo: 0xf7016008e88ba830 },
        Multiplier { hi: 0x1cda62055b2d9d83, lo: 0xb4c1b80b22ae923c },
        Multiplier { hi: 0x12087d4358fc8272, lo: 0x50f91306f5ad1b65 },
        Multiplier { hi: 0x168a9c942f3ba30e, lo: 0xe53757c8b318623f },
        Multiplier { hi: 0x1c2d43b93b0a8bd2, lo: 0x9e852dbadfde7acf },
        Multiplier { hi: 0x119c4a53c4e69763, lo: 0xa3133c94cbeb0cc1 },
        Multiplier { hi: 0x16035ce8b6203d3c, lo: 0x8bd80bb9fee5cff1 },
        Multiplier { hi: 0x1b843422e3a84c8b, lo: 0xaece0ea87e9f43ee },
        Multiplier { hi: 0x1132a095ce492fd7, lo: 0x4d40c9294f238a75 },
        Multiplier { hi: 0x157f48bb41db7bcd, lo: 0x2090fb73a2ec6d12 },
        Multiplier { hi: 0x1adf1aea12525ac0, lo: 0x68b53a508ba78856 },
        Multiplier { hi: 0x10cb70d24b7378b8, lo: 0x417144725748b536 },
        Multiplier { hi: 0x14fe4d06de5056e6, lo: 0x51cd958eed1ae283 },
        Multiplier { hi: 0x1a3de04895e46c9f, lo: 0xe640faf2a8619b24 },
        Multiplier { hi: 0x1066ac2d5daec3e3, lo: 0xefe89cd7a93d00f7 },
        Multiplier { hi: 0x14805738b51a74dc, lo: 0xebe2c40d938c4134 },
        Multiplier { hi: 0x19a06d06e2611214, lo: 0x26db7510f86f5181 },
        Multiplier { hi: 0x100444244d7cab4c, lo: 0x9849292a9b4592f1 },
        Multiplier { hi: 0x1405552d60dbd61f, lo: 0xbe5b73754216f7ad },
        Multiplier { hi: 0x1906aa78b912cba7, lo: 0xadf25052929cb598 },
        Multiplier { hi: 0x1f485516e7577e91, lo: 0x996ee4673743e2ff },
        Multiplier { hi: 0x138d352e5096af1a, lo: 0xffe54ec0828a6ddf },
        Multiplier { hi: 0x18708279e4bc5ae1, lo: 0xbfdea270a32d0957 },
        Multiplier { hi: 0x1e8ca3185deb719a, lo: 0x2fd64b0ccbf84bad },
        Multiplier { hi: 0x1317e5ef3ab32700, lo: 0x5de5eee7ff7b2f4c },
        Multiplier { hi: 0x17dddf6b095ff0c0, lo: 0x755f6aa1ff59fb1f },
        Multiplier { hi: 0x1dd55745cbb7ecf0, lo: 0x92b7454a7f3079e7 },
        Multiplier { hi: 0x12a5568b9f52f416, lo: 0x5bb28b4e8f7e4c30 },
        Multiplier { hi: 0x174eac2e8727b11b, lo: 0xf29f2e22335ddf3c },
        Multiplier { hi: 0x1d22573a28f19d62, lo: 0xef46f9aac035570b },
        Multiplier { hi: 0x123576845997025d, lo: 0xd58c5c0ab8215667 },
        Multiplier { hi: 0x16c2d4256ffcc2f5, lo: 0x4aef730d6629ac01 },
        Multiplier { hi: 0x1c73892ecbfbf3b2, lo: 0x9dab4fd0bfb41701 },
        Multiplier { hi: 0x11c835bd3f7d784f, lo: 0xa28b11e277d08e60 },
        Multiplier { hi: 0x163a432c8f5cd663, lo: 0x8b2dd65b15c4b1f9 },
        Multiplier { hi: 0x1bc8d3f7b3340bfc, lo: 0x6df94bf1db35de77 },
        Multiplier { hi: 0x115d847ad000877d, lo: 0xc4bbcf772901ab0a },
        Multiplier { hi: 0x15b4e5998400a95d, lo: 0x35eac354f34215cd },
        Multiplier { hi: 0x1b221effe500d3b4, lo: 0x8365742a30129b40 },
        Multiplier { hi: 0x10f5535fef208450, lo: 0xd21f689a5e0ba108 },
        Multiplier { hi: 0x1532a837eae8a565, lo: 0x06a742c0f58e894a },
        Multiplier { hi: 0x1a7f5245e5a2cebe, lo: 0x4851137132f22b9d },
        Multiplier { hi: 0x108f936baf85c136, lo: 0xed32ac26bfd75b42 },
        Multiplier { hi: 0x14b378469b673184, lo: 0xa87f57306fcd3212 },
        Multiplier { hi: 0x19e056584240fde5, lo: 0xd29f2cfc8bc07e97 },
        Multiplier { hi: 0x102c35f729689eaf, lo: 0xa3a37c1dd7584f1e },
        Multiplier { hi: 0x14374374f3c2c65b, lo: 0x8c8c5b254d2e62e6 },
        Multiplier { hi: 0x1945145230b377f2, lo: 0x6faf71eea079fb9f },
        Multiplier { hi: 0x1f965966bce055ef, lo: 0x0b9b4e6a48987a87 },
        Multiplier { hi: 0x13bdf7e0360c35b5, lo: 0x674111026d5f4c94 },
        Multiplier { hi: 0x18ad75d8438f4322, lo: 0xc111554308b71fba },
        Multiplier { hi: 0x1ed8d34e547313eb, lo: 0x7155aa93cae4e7a8 },
        Multiplier { hi: 0x13478410f4c7ec73, lo: 0x26d58a9c5ecf10c9 },
        Multiplier { hi: 0x1819651531f9e78f, lo: 0xf08aed437682d4fb },
        Multiplier { hi: 0x1e1fbe5a7e786173, lo: 0xecada89454238a3a },
        Multiplier { hi: 0x12d3d6f88f0b3ce8, lo: 0x73ec895cb4963664 },
        Multiplier { hi: 0x1788ccb6b2ce0c22, lo: 0x90e7abb3e1bbc3fd },
        Multiplier { hi: 0x1d6affe45f818f2b, lo: 0x352196a0da2ab4fd },
        Multiplier { hi: 0x1262dfeebbb0f97b, lo: 0x0134fe24885ab11e },
        Multiplier { hi: 0x16fb97ea6a9d37d9, lo: 0xc1823dadaa715d65 },
        Multiplier { hi: 0x1cba7de5054485d0, lo: 0x31e2cd19150db4bf },
        Multiplier { hi: 0x11f48eaf234ad3a2, lo: 0x1f2dc02fad2890f7 },
        Multiplier { hi: 0x1671b25aec1d888a, lo: 0xa6f9303b9872b535 },
        Multiplier { hi: 0x1c0e1ef1a724eaad, lo: 0x50b77c4a7e8f6282 },
        Multiplier { hi: 0x1188d357087712ac, lo: 0x5272adae8f199d91 },
        Multiplier { hi: 0x15eb082cca94d757, lo: 0x670f591a32e004f6 },
        Multiplier { hi: 0x1b65ca37fd3a0d2d, lo: 0x40d32f60bf980633 },
        Multiplier { hi: 0x111f9e62fe44483c, lo: 0x4883fd9c77bf03e0 },
        Multiplier { hi: 0x156785fbbdd55a4b, lo: 0x5aa4fd0395aec4d8 },
        Multiplier { hi: 0x1ac1677aad4ab0de, lo: 0x314e3c447b1a760e },
        Multiplier { hi: 0x10b8e0acac4eae8a, lo: 0xded0e5aaccf089c9 },
        Multiplier { hi: 0x14e718d7d7625a2d, lo: 0x96851f15802cac3b },
        Multiplier { hi: 0x1a20df0dcd3af0b8, lo: 0xfc2666dae037d74a },
        Multiplier { hi: 0x10548b68a044d673, lo: 0x9d980048cc22e68e },
        Multiplier { hi: 0x1469ae42c8560c10, lo: 0x84fe005aff2ba032 },
        Multiplier { hi: 0x198419d37a6b8f14, lo: 0xa63d8071bef6883e },
        Multiplier { hi: 0x1fe52048590672d9, lo: 0xcfcce08e2eb42a4e },
        Multiplier { hi: 0x13ef342d37a407c8, lo: 0x21e00c58dd309a70 },
        Multiplier { hi: 0x18eb0138858d09ba, lo: 0x2a580f6f147cc10d },
        Multiplier { hi: 0x1f25c186a6f04c28, lo: 0xb4ee134ad99bf150 },
        Multiplier { hi: 0x137798f428562f99, lo: 0x7114cc0ec80176d2 },
        Multiplier { hi: 0x18557f31326bbb7f, lo: 0xcd59ff127a01d486 },
        Multiplier { hi: 0x1e6adefd7f06aa5f, lo: 0xc0b07ed7188249a8 },
        Multiplier { hi: 0x1302cb5e6f642a7b, lo: 0xd86e4f466f516e09 },
        Multiplier { hi: 0x17c37e360b3d351a, lo: 0xce89e3180b25c98b },
        Multiplier { hi: 0x1db45dc38e0c8261, lo: 0x822c5bde0def3bee },
        Multiplier { hi: 0x1290ba9a38c7d17c, lo: 0xf15bb96ac8b58575 },
        Multiplier { hi: 0x1734e940c6f9c5dc, lo: 0x2db2a7c57ae2e6d2 },
        Multiplier { hi: 0x1d022390f8b83753, lo: 0x391f51b6d99ba086 },
        Multiplier { hi: 0x1221563a9b732294, lo: 0x03b3931248014454 },
        Multiplier { hi: 0x16a9abc9424feb39, lo: 0x04a077d6da019569 },
        Multiplier { hi: 0x1c5416bb92e3e607, lo: 0x45c895cc9081fac3 },
        Multiplier { hi: 0x11b48e353bce6fc4, lo: 0x8b9d5d9fda513cba },
        Multiplier { hi: 0x1621b1c28ac20bb5, lo: 0xae84b507d0e58be8 },
        Multiplier { hi: 0x1baa1e332d728ea3, lo: 0x1a25e249c51eeee3 },
        Multiplier { hi: 0x114a52dffc679925, lo: 0xf057ad6e1b33554d },
        Multiplier { hi: 0x159ce797fb817f6f, lo: 0x6c6d98c9a2002aa1 },
        Multiplier { hi: 0x1b04217dfa61df4b, lo: 0x4788fefc0a803549 },
        Multiplier { hi: 0x10e294eebc7d2b8f, lo: 0x0cb59f5d8690214e },
        Multiplier { hi: 0x151b3a2a6b9c7672, lo: 0xcfe30734e83429a1 },
        Multiplier { hi: 0x1a6208b50683940f, lo: 0x83dbc9022241340a },
        Multiplier { hi: 0x107d457124123c89, lo: 0xb2695da15568c086 },
        Multiplier { hi: 0x149c96cd6d16cbac, lo: 0x1f03b509aac2f0a7 },
        Multiplier { hi: 0x19c3bc80c85c7e97, lo: 0x26c4a24c1573acd1 },
        Multiplier { hi: 0x101a55d07d39cf1e, lo: 0x783ae56f8d684c03 },
        Multiplier { hi: 0x1420eb449c8842e6, lo: 0x16499ecb70c25f03 },
        Multiplier { hi: 0x19292615c3aa539f, lo: 0x9bdc067e4cf2f6c4 },
        Multiplier { hi: 0x1f736f9b3494e887, lo: 0x82d3081de02fb476 },
        Multiplier { hi: 0x13a825c100dd1154, lo: 0xb1c3e512ac1dd0c9 },
        Multiplier { hi: 0x18922f31411455a9, lo: 0xde34de57572544fc },
        Multiplier { hi: 0x1eb6bafd91596b14, lo: 0x55c215ed2cee963b },
        Multiplier { hi: 0x133234de7ad7e2ec, lo: 0xb5994db43c151de5 },
        Multiplier { hi: 0x17fec216198ddba7, lo: 0xe2ffa1214b1a655e },
        Multiplier { hi: 0x1dfe729b9ff15291, lo: 0xdbbf89699de0feb6 },
        Multiplier { hi: 0x12bf07a143f6d39b, lo: 0x2957b5e202ac9f31 },
        Multiplier { hi: 0x176ec98994f48881, lo: 0xf3ada35a8357c6fe },
        Multiplier { hi: 0x1d4a7bebfa31aaa2, lo: 0x70990c31242db8bd },
        Multiplier { hi: 0x124e8d737c5f0aa5, lo: 0x865fa79eb69c9376 },
        Multiplier { hi: 0x16e230d05b76cd4e, lo: 0xe7f791866443b854 },
        Multiplier { hi: 0x1c9abd04725480a2, lo: 0xa1f575e7fd54a669 },
        Multiplier { hi: 0x11e0b622c774d065, lo: 0xa53969b0fe54e801 },
        Multiplier { hi: 0x1658e3ab7952047f, lo: 0x0e87c41d3dea2202 },
        Multiplier { hi: 0x1bef1c9657a6859e, lo: 0xd229b5248d64aa82 },
        Multiplier { hi: 0x117571ddf6c81383, lo: 0x435a1136d85eea91 },
        Multiplier { hi: 0x15d2ce55747a1864, lo: 0x143095848e76a536 },
        Multiplier { hi: 0x1b4781ead1989e7d, lo: 0x193cbae5b2144e83 },
        Multiplier { hi: 0x110cb132c2ff630e, lo: 0x2fc5f4cf8f4cb112 },
        Multiplier { hi: 0x154fdd7f73bf3bd1, lo: 0xbbb77203731fdd56 },
        Multiplier { hi: 0x1aa3d4df50af0ac6, lo: 0x2aa54e844fe7d4ac },
        Multiplier { hi: 0x10a6650b926d66bb, lo: 0xdaa75112b1f0e4eb },
        Multiplier { hi: 0x14cffe4e7708c06a, lo: 0xd15125575e6d1e26 },
        Multiplier { hi: 0x1a03fde214caf085, lo: 0x85a56ead360865b0 },
        Multiplier { hi: 0x10427ead4cfed653, lo: 0x7387652c41c53f8e },
        Multiplier { hi: 0x14531e58a03e8be8, lo: 0x50693e7752368f71 },
        Multiplier { hi: 0x1967e5eec84e2ee2, lo: 0x64838e1526c4334e },
        Multiplier { hi: 0x1fc1df6a7a61ba9a, lo: 0xfda4719a70754022 },
        Multiplier { hi: 0x13d92ba28c7d14a0, lo: 0xde86c70086494815 },
        Multiplier { hi: 0x18cf768b2f9c59c9, lo: 0x162878c0a7db9a1a },
        Multiplier { hi: 0x1f03542dfb83703b, lo: 0x5bb296f0d1d280a1 },
        Multiplier { hi: 0x1362149cbd322625, lo: 0x194f9e5683239064 },
        Multiplier { hi: 0x183a99c3ec7eafae, lo: 0x5fa385ec23ec747e },
        Multiplier { hi: 0x1e494034e79e5b99, lo: 0xf78c67672ce7919d },
        Multiplier { hi: 0x12edc82110c2f940, lo: 0x3ab7c0a07c10bb02 },
        Multiplier { hi: 0x17a93a2954f3b790, lo: 0x4965b0c89b14e9c3 },
        Multiplier { hi: 0x1d9388b3aa30a574, lo: 0x5bbf1cfac1da2433 },
        Multiplier { hi: 0x127c35704a5e6768, lo: 0xb957721cb92856a0 },
        Multiplier { hi: 0x171b42cc5cf60142, lo: 0xe7ad4ea3e7726c48 },
        Multiplier { hi: 0x1ce2137f74338193, lo: 0xa198a24ce14f075a },
        Multiplier { hi: 0x120d4c2fa8a030fc, lo: 0x44ff65700cd16498 },
        Multiplier { hi: 0x16909f3b92c83d3b, lo: 0x563f3ecc1005bdbe },
        Multiplier { hi: 0x1c34c70a777a4c8a, lo: 0x2bcf0e7f14072d2e },
        Multiplier { hi: 0x11a0fc668aac6fd6, lo: 0x5b61690f6c847c3d },
        Multiplier { hi: 0x16093b802d578bcb, lo: 0xf239c35347a59b4c },
        Multiplier { hi: 0x1b8b8a6038ad6ebe, lo: 0xeec83428198f021f },
        Multiplier { hi: 0x1137367c236c6537, lo: 0x553d20990ff96153 },
        Multiplier { hi: 0x1585041b2c477e85, lo: 0x2a8c68bf53f7b9a8 },
        Multiplier { hi: 0x1ae64521f7595e26, lo: 0x752f82ef28f5a812 },
        Multiplier { hi: 0x10cfeb353a97dad8, lo: 0x093db1d57999890b },
        Multiplier { hi: 0x1503e602893dd18e, lo: 0x0b8d1e4ad7ffeb4e },
        Multiplier { hi: 0x1a44df832b8d45f1, lo: 0x8e7065dd8dffe622 },
        Multiplier { hi: 0x106b0bb1fb384bb6, lo: 0xf9063faa78bfefd5 },
        Multiplier { hi: 0x1485ce9e7a065ea4, lo: 0xb747cf9516efebca },
        Multiplier { hi: 0x19a742461887f64d, lo: 0xe519c37a5cabe6bd },
        Multiplier { hi: 0x1008896bcf54f9f0, lo: 0xaf301a2c79eb7036 },
        Multiplier { hi: 0x140aabc6c32a386c, lo: 0xdafc20b798664c43 },
        Multiplier { hi: 0x190d56b873f4c688, lo: 0x11bb28e57e7fdf54 },
        Multiplier { hi: 0x1f50ac6690f1f82a, lo: 0x1629f31ede1fd72a },
        Multiplier { hi: 0x13926bc01a973b1a, lo: 0x4dda37f34ad3e67a },
        Multiplier { hi: 0x187706b0213d09e0, lo: 0xe150c5f01d88e019 },
        Multiplier { hi: 0x1e94c85c298c4c59, lo: 0x19a4f76c24eb181f },
        Multiplier { hi: 0x131cfd3999f7afb7, lo: 0xb0071aa39712ef13 },
        Multiplier { hi: 0x17e43c8800759ba5, lo: 0x9c08e14c7cd7aad8 },
        Multiplier { hi: 0x1ddd4baa0093028f, lo: 0x030b199f9c0d958e },
        Multiplier { hi: 0x12aa4f4a405be199, lo: 0x61e6f003c1887d79 },
        Multiplier { hi: 0x1754e31cd072d9ff, lo: 0xba60ac04b1ea9cd7 },
        Multiplier { hi: 0x1d2a1be4048f907f, lo: 0xa8f8d705de65440d },
        Multiplier { hi: 0x123a516e82d9ba4f, lo: 0xc99b8663aaff4a88 },
        Multiplier { hi: 0x16c8e5ca239028e3, lo: 0xbc0267fc95bf1d2a },
        Multiplier { hi: 0x1c7b1f3cac74331c, lo: 0xab0301fbbb2ee474 },
        Multiplier { hi: 0x11ccf385ebc89ff1, lo: 0xeae1e13d54fd4ec9 },
        Multiplier { hi: 0x1640306766bac7ee, lo: 0x659a598caa3ca27b },
        Multiplier { hi: 0x1bd03c81406979e9, lo: 0xff00efefd4cbcb1a },
        Multiplier { hi: 0x116225d0c841ec32, lo: 0x3f6095f5e4ff5ef0 },
        Multiplier { hi: 0x15baaf44fa52673e, lo: 0xcf38bb735e3f36ac },
        Multiplier { hi: 0x1b295b1638e7010e, lo: 0x8306ea5035cf0457 },
        Multiplier { hi: 0x10f9d8ede39060a9, lo: 0x11e4527221a162b6 },
        Multiplier { hi: 0x15384f295c7478d3, lo: 0x565d670eaa09bb64 },
        Multiplier { hi: 0x1a8662f3b3919708, lo: 0x2bf4c0d2548c2a3d },
        Multiplier { hi: 0x1093fdd8503afe65, lo: 0x1b78f88374d79a66 },
        Multiplier { hi: 0x14b8fd4e6449bdfe, lo: 0x625736a4520d8100 },
        Multiplier { hi: 0x19e73ca1fd5c2d7d, lo: 0xfaed044d6690e140 },
        Multiplier { hi: 0x103085e53e599c6e, lo: 0xbcd422b0601a8cc8 },
        Multiplier { hi: 0x143ca75e8df0038a, lo: 0x6c092b5c78212ffa },
        Multiplier { hi: 0x194bd136316c046d, lo: 0x070b763396297bf8 },
        Multiplier { hi: 0x1f9ec583bdc70588, lo: 0x48ce53c07bb3daf6 },
        Multiplier { hi: 0x13c33b72569c6375, lo: 0x2d80f4584d5068da },
        Multiplier { hi: 0x18b40a4eec437c52, lo: 0x78e1316e60a48310 },
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;
    use crate::conv::bignum::Big;
    use crate::conv::common::pow5_bits;

    fn big(entry: (u64, u64), word_bits: usize) -> Big {
        let mut x = Big::from_u64(entry.0);
        x.mul_pow2(word_bits).add(&Big::from_u64(entry.1));
        x
    }

    fn pow5(i: usize) -> Big {
        *Big::from_u64(1).mul_pow5(i)
    }

    /// `entry` is the top `bitcount` bits of `5^i`, or `5^i` shifted up to `bitcount` bits.
    fn check_pow(i: usize, entry: (u64, u64), word_bits: usize, bitcount: i32) {
        let shift = pow5_bits(i as i32) - bitcount;
        let (mut lo, mut hi, mut p) = (big(entry, word_bits), big(entry, word_bits), pow5(i));
        hi.add(&Big::from_u64(1));
        if shift >= 0 {
            lo.mul_pow2(shift as usize);
            hi.mul_pow2(shift as usize);
        } else {
            p.mul_pow2(shift.unsigned_abs() as usize);
        }
        assert!(lo <= p && p < hi, "POW5_SPLIT[{i}]");
    }

    /// `entry` is `floor(2^(pow5bits(i) - 1 + bitcount) / 5^i) + 1`.
    fn check_inv(i: usize, entry: (u64, u64), word_bits: usize, bitcount: i32) {
        let mut pow2 = Big::from_u64(1);
        pow2.mul_pow2((pow5_bits(i as i32) - 1 + bitcount) as usize);
        let mut above = big(entry, word_bits);
        let mut below = above;
        below.sub(&Big::from_u64(1));
        above.mul_pow5(i);
        below.mul_pow5(i);
        assert!(below <= pow2 && pow2.cmp(&above) == Ordering::Less, "POW5_INV_SPLIT[{i}]");
    }

    #[test]
    fn b32_tables() {
        for i in 0 .. b32::POW5_SPLIT.len() {
            let m = b32::POW5_SPLIT.get(i as i32);
            check_pow(i, (m.hi as u64, m.lo as u64), 32, b32::POW5_BITCOUNT);
        }
        for i in 0 .. b32::POW5_INV_SPLIT.len() {
            let m = b32::POW5_INV_SPLIT.get(i as i32);
            check_inv(i, (m.hi as u64, m.lo as u64), 32, b32::POW5_INV_BITCOUNT);
        }
    }

    #[test]
    fn b64_tables() {
        for i in 0 .. b64::POW5_SPLIT.len() {
            let m = b64::POW5_SPLIT.get(i as i32);
            check_pow(i, (m.hi, m.lo), 64, b64::POW5_BITCOUNT);
        }
        for i in 0 .. b64::POW5_INV_SPLIT.len() {
            let m = b64::POW5_INV_SPLIT.get(i as i32);
            check_inv(i, (m.hi, m.lo), 64, b64::POW5_INV_BITCOUNT);
        }
    }
}
