//! Tabelas de calibração do algoritmo de potência em ponto fixo.
//! Constantes copiadas literalmente: a concordância bit a bit com o ledger depende delas.

use crate::types::{hex_u512 as h, U512};

pub const MIN_PRECISION: u32 = 32;
pub const MAX_PRECISION: u32 = 127;

pub const FIXED_1: U512 = h("0x080000000000000000000000000000000");
pub const FIXED_2: U512 = h("0x100000000000000000000000000000000");
pub const MAX_NUM: U512 = h("0x200000000000000000000000000000000");

pub const LN2_NUMERATOR: U512 = h("0x3f80fe03f80fe03f80fe03f80fe03f8");
pub const LN2_DENOMINATOR: U512 = h("0x5b9de1d10bf4103d647b0955897ba80");

pub const OPT_LOG_MAX_VAL: U512 = h("0x15bf0a8b1457695355fb8ac404e7a79e3");
pub const OPT_EXP_MAX_VAL: U512 = h("0x800000000000000000000000000000000");

/// `(limiar, incremento)` do `optimal_log`, em ordem decrescente de limiar.
pub const LOG_THRESHOLDS: [(U512, U512); 8] = [
    (h("0xd3094c70f034de4b96ff7d5b6f99fcd8"), h("0x40000000000000000000000000000000")),
    (h("0xa45af1e1f40c333b3de1db4dd55f29a7"), h("0x20000000000000000000000000000000")),
    (h("0x910b022db7ae67ce76b441c27035c6a1"), h("0x10000000000000000000000000000000")),
    (h("0x88415abbe9a76bead8d00cf112e4d4a8"), h("0x08000000000000000000000000000000")),
    (h("0x84102b00893f64c705e841d5d4064bd3"), h("0x04000000000000000000000000000000")),
    (h("0x8204055aaef1c8bd5c3259f4822735a2"), h("0x02000000000000000000000000000000")),
    (h("0x810100ab00222d861931c15e39b44e99"), h("0x01000000000000000000000000000000")),
    (h("0x808040155aabbbe9451521693554f733"), h("0x00800000000000000000000000000000")),
];

/// `(coeficiente, divisor)` da série de `ln(1+y)` no resíduo.
pub const LOG_SERIES: [(U512, U512); 8] = [
    (h("0x100000000000000000000000000000000"), h("0x100000000000000000000000000000000")),
    (h("0x0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), h("0x200000000000000000000000000000000")),
    (h("0x099999999999999999999999999999999"), h("0x300000000000000000000000000000000")),
    (h("0x092492492492492492492492492492492"), h("0x400000000000000000000000000000000")),
    (h("0x08e38e38e38e38e38e38e38e38e38e38e"), h("0x500000000000000000000000000000000")),
    (h("0x08ba2e8ba2e8ba2e8ba2e8ba2e8ba2e8b"), h("0x600000000000000000000000000000000")),
    (h("0x089d89d89d89d89d89d89d89d89d89d89"), h("0x700000000000000000000000000000000")),
    (h("0x088888888888888888888888888888888"), h("0x800000000000000000000000000000000")),
];

/// Módulo do resíduo de `optimal_exp` (2^124).
pub const OPT_EXP_RESIDUE: U512 = h("0x10000000000000000000000000000000");

/// Coeficientes de `optimal_exp` (z = z*y/FIXED_1 a cada termo).
pub const OPT_EXP_SERIES: [U512; 19] = [
    h("0x10e1b3be415a0000"),
    h("0x05a0913f6b1e0000"),
    h("0x0168244fdac78000"),
    h("0x004807432bc18000"),
    h("0x000c0135dca04000"),
    h("0x0001b707b1cdc000"),
    h("0x000036e0f639b800"),
    h("0x00000618fee9f800"),
    h("0x0000009c197dcc00"),
    h("0x0000000e30dce400"),
    h("0x000000012ebd1300"),
    h("0x0000000017499f00"),
    h("0x0000000001a9d480"),
    h("0x00000000001c6380"),
    h("0x000000000001c638"),
    h("0x0000000000001ab8"),
    h("0x000000000000017c"),
    h("0x0000000000000014"),
    h("0x0000000000000001"),
];

pub const OPT_EXP_DIVISOR: U512 = h("0x21c3677c82b40000");

/// `(bit, numerador, denominador)`: correções de `optimal_exp`, bit crescente.
pub const OPT_EXP_CORRECTIONS: [(U512, U512, U512); 7] = [
    (h("0x010000000000000000000000000000000"), h("0x1c3d6a24ed82218787d624d3e5eba95f9"), h("0x18ebef9eac820ae8682b9793ac6d1e776")),
    (h("0x020000000000000000000000000000000"), h("0x18ebef9eac820ae8682b9793ac6d1e778"), h("0x1368b2fc6f9609fe7aceb46aa619baed4")),
    (h("0x040000000000000000000000000000000"), h("0x1368b2fc6f9609fe7aceb46aa619baed5"), h("0x0bc5ab1b16779be3575bd8f0520a9f21f")),
    (h("0x080000000000000000000000000000000"), h("0x0bc5ab1b16779be3575bd8f0520a9f21e"), h("0x0454aaa8efe072e7f6ddbab84b40a55c9")),
    (h("0x100000000000000000000000000000000"), h("0x0454aaa8efe072e7f6ddbab84b40a55c5"), h("0x00960aadc109e7a3bf4578099615711ea")),
    (h("0x200000000000000000000000000000000"), h("0x00960aadc109e7a3bf4578099615711d7"), h("0x0002bf84208204f5977f9a8cf01fdce3d")),
    (h("0x400000000000000000000000000000000"), h("0x0002bf84208204f5977f9a8cf01fdc307"), h("0x0000003c6ab775dd0b95b4cbee7e65d11")),
];

/// Coeficientes de `general_exp` (xi = xi*x >> p a cada termo).
pub const GENERAL_EXP_SERIES: [U512; 32] = [
    h("0x3442c4e6074a82f1797f72ac0000000"),
    h("0x116b96f757c380fb287fd0e40000000"),
    h("0x045ae5bdd5f0e03eca1ff4390000000"),
    h("0x00defabf91302cd95b9ffda50000000"),
    h("0x002529ca9832b22439efff9b8000000"),
    h("0x00054f1cf12bd04e516b6da88000000"),
    h("0x0000a9e39e257a09ca2d6db51000000"),
    h("0x000012e066e7b839fa050c309000000"),
    h("0x000001e33d7d926c329a1ad1a800000"),
    h("0x0000002bee513bdb4a6b19b5f800000"),
    h("0x00000003a9316fa79b88eccf2a00000"),
    h("0x0000000048177ebe1fa812375200000"),
    h("0x0000000005263fe90242dcbacf00000"),
    h("0x000000000057e22099c030d94100000"),
    h("0x0000000000057e22099c030d9410000"),
    h("0x00000000000052b6b54569976310000"),
    h("0x00000000000004985f67696bf748000"),
    h("0x000000000000003dea12ea99e498000"),
    h("0x00000000000000031880f2214b6e000"),
    h("0x000000000000000025bcff56eb36000"),
    h("0x000000000000000001b722e10ab1000"),
    h("0x0000000000000000001317c70077000"),
    h("0x00000000000000000000cba84aafa00"),
    h("0x00000000000000000000082573a0a00"),
    h("0x00000000000000000000005035ad900"),
    h("0x000000000000000000000002f881b00"),
    h("0x0000000000000000000000001b29340"),
    h("0x00000000000000000000000000efc40"),
    h("0x0000000000000000000000000007fe0"),
    h("0x0000000000000000000000000000420"),
    h("0x0000000000000000000000000000021"),
    h("0x0000000000000000000000000000001"),
];

pub const GENERAL_EXP_DIVISOR: U512 = h("0x688589cc0e9505e2f2fee5580000000");

/// Maior argumento aceito por `general_exp` em cada precisão `p` (índice `p - MIN_PRECISION`).
pub static MAX_EXP_ARRAY: [U512; 96] = [
    h("0x1c35fedd14ffffffffffffffffffffffff"), // 32
    h("0x1b0ce43b323fffffffffffffffffffffff"), // 33
    h("0x19f0028ec1ffffffffffffffffffffffff"), // 34
    h("0x18ded91f0e7fffffffffffffffffffffff"), // 35
    h("0x17d8ec7f0417ffffffffffffffffffffff"), // 36
    h("0x16ddc6556cdbffffffffffffffffffffff"), // 37
    h("0x15ecf52776a1ffffffffffffffffffffff"), // 38
    h("0x15060c256cb2ffffffffffffffffffffff"), // 39
    h("0x1428a2f98d72ffffffffffffffffffffff"), // 40
    h("0x13545598e5c23fffffffffffffffffffff"), // 41
    h("0x1288c4161ce1dfffffffffffffffffffff"), // 42
    h("0x11c592761c666fffffffffffffffffffff"), // 43
    h("0x110a688680a757ffffffffffffffffffff"), // 44
    h("0x1056f1b5bedf77ffffffffffffffffffff"), // 45
    h("0x0faadceceeff8bffffffffffffffffffff"), // 46
    h("0x0f05dc6b27edadffffffffffffffffffff"), // 47
    h("0x0e67a5a25da4107fffffffffffffffffff"), // 48
    h("0x0dcff115b14eedffffffffffffffffffff"), // 49
    h("0x0d3e7a392431239fffffffffffffffffff"), // 50
    h("0x0cb2ff529eb71e4fffffffffffffffffff"), // 51
    h("0x0c2d415c3db974afffffffffffffffffff"), // 52
    h("0x0bad03e7d883f69bffffffffffffffffff"), // 53
    h("0x0b320d03b2c343d5ffffffffffffffffff"), // 54
    h("0x0abc25204e02828dffffffffffffffffff"), // 55
    h("0x0a4b16f74ee4bb207fffffffffffffffff"), // 56
    h("0x09deaf736ac1f569ffffffffffffffffff"), // 57
    h("0x0976bd9952c7aa957fffffffffffffffff"), // 58
    h("0x09131271922eaa606fffffffffffffffff"), // 59
    h("0x08b380f3558668c46fffffffffffffffff"), // 60
    h("0x0857ddf0117efa215bffffffffffffffff"), // 61
    h("0x07ffffffffffffffffffffffffffffffff"), // 62
    h("0x07abbf6f6abb9d087fffffffffffffffff"), // 63
    h("0x075af62cbac95f7dfa7fffffffffffffff"), // 64
    h("0x070d7fb7452e187ac13fffffffffffffff"), // 65
    h("0x06c3390ecc8af379295fffffffffffffff"), // 66
    h("0x067c00a3b07ffc01fd6fffffffffffffff"), // 67
    h("0x0637b647c39cbb9d3d27ffffffffffffff"), // 68
    h("0x05f63b1fc104dbd39587ffffffffffffff"), // 69
    h("0x05b771955b36e12f7235ffffffffffffff"), // 70
    h("0x057b3d49dda84556d6f6ffffffffffffff"), // 71
    h("0x054183095b2c8ececf30ffffffffffffff"), // 72
    h("0x050a28be635ca2b888f77fffffffffffff"), // 73
    h("0x04d5156639708c9db33c3fffffffffffff"), // 74
    h("0x04a23105873875bd52dfdfffffffffffff"), // 75
    h("0x0471649d87199aa990756fffffffffffff"), // 76
    h("0x04429a21a029d4c1457cfbffffffffffff"), // 77
    h("0x0415bc6d6fb7dd71af2cb3ffffffffffff"), // 78
    h("0x03eab73b3bbfe282243ce1ffffffffffff"), // 79
    h("0x03c1771ac9fb6b4c18e229ffffffffffff"), // 80
    h("0x0399e96897690418f785257fffffffffff"), // 81
    h("0x0373fc456c53bb779bf0ea9fffffffffff"), // 82
    h("0x034f9e8e490c48e67e6ab8bfffffffffff"), // 83
    h("0x032cbfd4a7adc790560b3337ffffffffff"), // 84
    h("0x030b50570f6e5d2acca94613ffffffffff"), // 85
    h("0x02eb40f9f620fda6b56c2861ffffffffff"), // 86
    h("0x02cc8340ecb0d0f520a6af58ffffffffff"), // 87
    h("0x02af09481380a0a35cf1ba02ffffffffff"), // 88
    h("0x0292c5bdd3b92ec810287b1b3fffffffff"), // 89
    h("0x0277abdcdab07d5a77ac6d6b9fffffffff"), // 90
    h("0x025daf6654b1eaa55fd64df5efffffffff"), // 91
    h("0x0244c49c648baa98192dce88b7ffffffff"), // 92
    h("0x022ce03cd5619a311b2471268bffffffff"), // 93
    h("0x0215f77c045fbe885654a44a0fffffffff"), // 94
    h("0x01ffffffffffffffffffffffffffffffff"), // 95
    h("0x01eaefdbdaaee7421fc4d3ede5ffffffff"), // 96
    h("0x01d6bd8b2eb257df7e8ca57b09bfffffff"), // 97
    h("0x01c35fedd14b861eb0443f7f133fffffff"), // 98
    h("0x01b0ce43b322bcde4a56e8ada5afffffff"), // 99
    h("0x019f0028ec1fff007f5a195a39dfffffff"), // 100
    h("0x018ded91f0e72ee74f49b15ba527ffffff"), // 101
    h("0x017d8ec7f04136f4e5615fd41a63ffffff"), // 102
    h("0x016ddc6556cdb84bdc8d12d22e6fffffff"), // 103
    h("0x015ecf52776a1155b5bd8395814f7fffff"), // 104
    h("0x015060c256cb23b3b3cc3754cf40ffffff"), // 105
    h("0x01428a2f98d728ae223ddab715be3fffff"), // 106
    h("0x013545598e5c23276ccf0ede68034fffff"), // 107
    h("0x01288c4161ce1d6f54b7f61081194fffff"), // 108
    h("0x011c592761c666aa641d5a01a40f17ffff"), // 109
    h("0x0110a688680a7530515f3e6e6cfdcdffff"), // 110
    h("0x01056f1b5bedf75c6bcb2ce8aed428ffff"), // 111
    h("0x00faadceceeff8a0890f3875f008277fff"), // 112
    h("0x00f05dc6b27edad306388a600f6ba0bfff"), // 113
    h("0x00e67a5a25da41063de1495d5b18cdbfff"), // 114
    h("0x00dcff115b14eedde6fc3aa5353f2e4fff"), // 115
    h("0x00d3e7a3924312399f9aae2e0f868f8fff"), // 116
    h("0x00cb2ff529eb71e41582cccd5a1ee26fff"), // 117
    h("0x00c2d415c3db974ab32a51840c0b67edff"), // 118
    h("0x00bad03e7d883f69ad5b0a186184e06bff"), // 119
    h("0x00b320d03b2c343d4829abd6075f0cc5ff"), // 120
    h("0x00abc25204e02828d73c6e80bcdb1a95bf"), // 121
    h("0x00a4b16f74ee4bb2040a1ec6c15fbbf2df"), // 122
    h("0x009deaf736ac1f569deb1b5ae3f36c130f"), // 123
    h("0x00976bd9952c7aa957f5937d790ef65037"), // 124
    h("0x009131271922eaa6064b73a22d0bd4f2bf"), // 125
    h("0x008b380f3558668c46c91c49a2f8e967b9"), // 126
    h("0x00857ddf0117efa215952912839f6473e6"), // 127
];

/// Limite de `general_exp` na precisão `p` (`MIN_PRECISION..=MAX_PRECISION`).
#[inline]
pub fn max_exp(precision: u32) -> U512 {
    MAX_EXP_ARRAY[(precision - MIN_PRECISION) as usize]
}
