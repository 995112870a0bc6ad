//! Generated codepoint pairs for the bundled gallery icon font.
//!
//! One `(code, glyph)` pair per glyph exported from the font's private-use
//! block. Regenerated whenever the font changes; do not edit by hand.

/// Every glyph the bundled icon font carries, keyed by its 4-digit
/// lowercase hex code.
pub(crate) static CODEPOINTS: &[(&str, char)] = &[
    ("e000", '\u{e000}'),
    ("e001", '\u{e001}'),
    ("e002", '\u{e002}'),
    ("e003", '\u{e003}'),
    ("e004", '\u{e004}'),
    ("e005", '\u{e005}'),
    ("e006", '\u{e006}'),
    ("e007", '\u{e007}'),
    ("e008", '\u{e008}'),
    ("e009", '\u{e009}'),
    ("e00a", '\u{e00a}'),
    ("e00b", '\u{e00b}'),
    ("e00c", '\u{e00c}'),
    ("e00d", '\u{e00d}'),
    ("e00e", '\u{e00e}'),
    ("e00f", '\u{e00f}'),
    ("e010", '\u{e010}'),
    ("e011", '\u{e011}'),
    ("e012", '\u{e012}'),
    ("e013", '\u{e013}'),
    ("e014", '\u{e014}'),
    ("e015", '\u{e015}'),
    ("e016", '\u{e016}'),
    ("e017", '\u{e017}'),
    ("e018", '\u{e018}'),
    ("e019", '\u{e019}'),
    ("e01a", '\u{e01a}'),
    ("e01b", '\u{e01b}'),
    ("e01c", '\u{e01c}'),
    ("e01d", '\u{e01d}'),
    ("e01e", '\u{e01e}'),
    ("e01f", '\u{e01f}'),
    ("e020", '\u{e020}'),
    ("e021", '\u{e021}'),
    ("e022", '\u{e022}'),
    ("e023", '\u{e023}'),
    ("e024", '\u{e024}'),
    ("e025", '\u{e025}'),
    ("e026", '\u{e026}'),
    ("e027", '\u{e027}'),
    ("e028", '\u{e028}'),
    ("e029", '\u{e029}'),
    ("e02a", '\u{e02a}'),
    ("e02b", '\u{e02b}'),
    ("e02c", '\u{e02c}'),
    ("e02d", '\u{e02d}'),
    ("e02e", '\u{e02e}'),
    ("e02f", '\u{e02f}'),
    ("e030", '\u{e030}'),
    ("e031", '\u{e031}'),
    ("e032", '\u{e032}'),
    ("e033", '\u{e033}'),
    ("e034", '\u{e034}'),
    ("e035", '\u{e035}'),
    ("e036", '\u{e036}'),
    ("e037", '\u{e037}'),
    ("e038", '\u{e038}'),
    ("e039", '\u{e039}'),
    ("e03a", '\u{e03a}'),
    ("e03b", '\u{e03b}'),
    ("e03c", '\u{e03c}'),
    ("e03d", '\u{e03d}'),
    ("e03e", '\u{e03e}'),
    ("e03f", '\u{e03f}'),
    ("e040", '\u{e040}'),
    ("e041", '\u{e041}'),
    ("e042", '\u{e042}'),
    ("e043", '\u{e043}'),
    ("e044", '\u{e044}'),
    ("e045", '\u{e045}'),
    ("e046", '\u{e046}'),
    ("e047", '\u{e047}'),
    ("e048", '\u{e048}'),
    ("e049", '\u{e049}'),
    ("e04a", '\u{e04a}'),
    ("e04b", '\u{e04b}'),
    ("e04c", '\u{e04c}'),
    ("e04d", '\u{e04d}'),
    ("e04e", '\u{e04e}'),
    ("e04f", '\u{e04f}'),
    ("e050", '\u{e050}'),
    ("e051", '\u{e051}'),
    ("e052", '\u{e052}'),
    ("e053", '\u{e053}'),
    ("e054", '\u{e054}'),
    ("e055", '\u{e055}'),
    ("e056", '\u{e056}'),
    ("e057", '\u{e057}'),
    ("e058", '\u{e058}'),
    ("e059", '\u{e059}'),
    ("e05a", '\u{e05a}'),
    ("e05b", '\u{e05b}'),
    ("e05c", '\u{e05c}'),
    ("e05d", '\u{e05d}'),
    ("e05e", '\u{e05e}'),
    ("e05f", '\u{e05f}'),
    ("e060", '\u{e060}'),
    ("e061", '\u{e061}'),
    ("e062", '\u{e062}'),
    ("e063", '\u{e063}'),
    ("e064", '\u{e064}'),
    ("e065", '\u{e065}'),
    ("e066", '\u{e066}'),
    ("e067", '\u{e067}'),
    ("e068", '\u{e068}'),
    ("e069", '\u{e069}'),
    ("e06a", '\u{e06a}'),
    ("e06b", '\u{e06b}'),
    ("e06c", '\u{e06c}'),
    ("e06d", '\u{e06d}'),
    ("e06e", '\u{e06e}'),
    ("e06f", '\u{e06f}'),
    ("e070", '\u{e070}'),
    ("e071", '\u{e071}'),
    ("e072", '\u{e072}'),
    ("e073", '\u{e073}'),
    ("e074", '\u{e074}'),
    ("e075", '\u{e075}'),
    ("e076", '\u{e076}'),
    ("e077", '\u{e077}'),
    ("e078", '\u{e078}'),
    ("e079", '\u{e079}'),
    ("e07a", '\u{e07a}'),
    ("e07b", '\u{e07b}'),
    ("e07c", '\u{e07c}'),
    ("e07d", '\u{e07d}'),
    ("e07e", '\u{e07e}'),
    ("e07f", '\u{e07f}'),
    ("e080", '\u{e080}'),
    ("e081", '\u{e081}'),
    ("e082", '\u{e082}'),
    ("e083", '\u{e083}'),
    ("e084", '\u{e084}'),
    ("e085", '\u{e085}'),
    ("e086", '\u{e086}'),
    ("e087", '\u{e087}'),
    ("e088", '\u{e088}'),
    ("e089", '\u{e089}'),
    ("e08a", '\u{e08a}'),
    ("e08b", '\u{e08b}'),
    ("e08c", '\u{e08c}'),
    ("e08d", '\u{e08d}'),
    ("e08e", '\u{e08e}'),
    ("e08f", '\u{e08f}'),
    ("e090", '\u{e090}'),
    ("e091", '\u{e091}'),
    ("e092", '\u{e092}'),
    ("e093", '\u{e093}'),
    ("e094", '\u{e094}'),
    ("e095", '\u{e095}'),
    ("e096", '\u{e096}'),
    ("e097", '\u{e097}'),
    ("e098", '\u{e098}'),
    ("e099", '\u{e099}'),
    ("e09a", '\u{e09a}'),
    ("e09b", '\u{e09b}'),
    ("e09c", '\u{e09c}'),
    ("e09d", '\u{e09d}'),
    ("e09e", '\u{e09e}'),
    ("e09f", '\u{e09f}'),
    ("e0a0", '\u{e0a0}'),
    ("e0a1", '\u{e0a1}'),
    ("e0a2", '\u{e0a2}'),
    ("e0a3", '\u{e0a3}'),
    ("e0a4", '\u{e0a4}'),
    ("e0a5", '\u{e0a5}'),
    ("e0a6", '\u{e0a6}'),
    ("e0a7", '\u{e0a7}'),
    ("e0a8", '\u{e0a8}'),
    ("e0a9", '\u{e0a9}'),
    ("e0aa", '\u{e0aa}'),
    ("e0ab", '\u{e0ab}'),
    ("e0ac", '\u{e0ac}'),
    ("e0ad", '\u{e0ad}'),
    ("e0ae", '\u{e0ae}'),
    ("e0af", '\u{e0af}'),
    ("e0b0", '\u{e0b0}'),
    ("e0b1", '\u{e0b1}'),
    ("e0b2", '\u{e0b2}'),
    ("e0b3", '\u{e0b3}'),
    ("e0b4", '\u{e0b4}'),
    ("e0b5", '\u{e0b5}'),
    ("e0b6", '\u{e0b6}'),
    ("e0b7", '\u{e0b7}'),
    ("e0b8", '\u{e0b8}'),
    ("e0b9", '\u{e0b9}'),
    ("e0ba", '\u{e0ba}'),
    ("e0bb", '\u{e0bb}'),
    ("e0bc", '\u{e0bc}'),
    ("e0bd", '\u{e0bd}'),
    ("e0be", '\u{e0be}'),
    ("e0bf", '\u{e0bf}'),
    ("e0c0", '\u{e0c0}'),
    ("e0c1", '\u{e0c1}'),
    ("e0c2", '\u{e0c2}'),
    ("e0c3", '\u{e0c3}'),
    ("e0c4", '\u{e0c4}'),
    ("e0c5", '\u{e0c5}'),
    ("e0c6", '\u{e0c6}'),
    ("e0c7", '\u{e0c7}'),
    ("e0c8", '\u{e0c8}'),
    ("e0c9", '\u{e0c9}'),
    ("e0ca", '\u{e0ca}'),
    ("e0cb", '\u{e0cb}'),
    ("e0cc", '\u{e0cc}'),
    ("e0cd", '\u{e0cd}'),
    ("e0ce", '\u{e0ce}'),
    ("e0cf", '\u{e0cf}'),
    ("e0d0", '\u{e0d0}'),
    ("e0d1", '\u{e0d1}'),
    ("e0d2", '\u{e0d2}'),
    ("e0d3", '\u{e0d3}'),
    ("e0d4", '\u{e0d4}'),
    ("e0d5", '\u{e0d5}'),
    ("e0d6", '\u{e0d6}'),
    ("e0d7", '\u{e0d7}'),
    ("e0d8", '\u{e0d8}'),
    ("e0d9", '\u{e0d9}'),
    ("e0da", '\u{e0da}'),
    ("e0db", '\u{e0db}'),
    ("e0dc", '\u{e0dc}'),
    ("e0dd", '\u{e0dd}'),
    ("e0de", '\u{e0de}'),
    ("e0df", '\u{e0df}'),
    ("e0e0", '\u{e0e0}'),
    ("e0e1", '\u{e0e1}'),
    ("e0e2", '\u{e0e2}'),
    ("e0e3", '\u{e0e3}'),
    ("e0e4", '\u{e0e4}'),
    ("e0e5", '\u{e0e5}'),
    ("e0e6", '\u{e0e6}'),
    ("e0e7", '\u{e0e7}'),
    ("e0e8", '\u{e0e8}'),
    ("e0e9", '\u{e0e9}'),
    ("e0ea", '\u{e0ea}'),
    ("e0eb", '\u{e0eb}'),
    ("e0ec", '\u{e0ec}'),
    ("e0ed", '\u{e0ed}'),
    ("e0ee", '\u{e0ee}'),
    ("e0ef", '\u{e0ef}'),
    ("e0f0", '\u{e0f0}'),
    ("e0f1", '\u{e0f1}'),
    ("e0f2", '\u{e0f2}'),
    ("e0f3", '\u{e0f3}'),
    ("e0f4", '\u{e0f4}'),
    ("e0f5", '\u{e0f5}'),
    ("e0f6", '\u{e0f6}'),
    ("e0f7", '\u{e0f7}'),
    ("e0f8", '\u{e0f8}'),
    ("e0f9", '\u{e0f9}'),
    ("e0fa", '\u{e0fa}'),
    ("e0fb", '\u{e0fb}'),
    ("e0fc", '\u{e0fc}'),
    ("e0fd", '\u{e0fd}'),
    ("e0fe", '\u{e0fe}'),
    ("e0ff", '\u{e0ff}'),
    ("e100", '\u{e100}'),
    ("e101", '\u{e101}'),
    ("e102", '\u{e102}'),
    ("e103", '\u{e103}'),
    ("e104", '\u{e104}'),
    ("e105", '\u{e105}'),
    ("e106", '\u{e106}'),
    ("e107", '\u{e107}'),
    ("e108", '\u{e108}'),
    ("e109", '\u{e109}'),
    ("e10a", '\u{e10a}'),
    ("e10b", '\u{e10b}'),
    ("e10c", '\u{e10c}'),
    ("e10d", '\u{e10d}'),
    ("e10e", '\u{e10e}'),
    ("e10f", '\u{e10f}'),
    ("e110", '\u{e110}'),
    ("e111", '\u{e111}'),
    ("e112", '\u{e112}'),
    ("e113", '\u{e113}'),
    ("e114", '\u{e114}'),
    ("e115", '\u{e115}'),
    ("e116", '\u{e116}'),
    ("e117", '\u{e117}'),
    ("e118", '\u{e118}'),
    ("e119", '\u{e119}'),
    ("e11a", '\u{e11a}'),
    ("e11b", '\u{e11b}'),
    ("e11c", '\u{e11c}'),
    ("e11d", '\u{e11d}'),
    ("e11e", '\u{e11e}'),
    ("e11f", '\u{e11f}'),
    ("e120", '\u{e120}'),
    ("e121", '\u{e121}'),
    ("e122", '\u{e122}'),
    ("e123", '\u{e123}'),
    ("e124", '\u{e124}'),
    ("e125", '\u{e125}'),
    ("e126", '\u{e126}'),
    ("e127", '\u{e127}'),
    ("e128", '\u{e128}'),
    ("e129", '\u{e129}'),
    ("e12a", '\u{e12a}'),
    ("e12b", '\u{e12b}'),
    ("e12c", '\u{e12c}'),
    ("e12d", '\u{e12d}'),
    ("e12e", '\u{e12e}'),
    ("e12f", '\u{e12f}'),
    ("e130", '\u{e130}'),
    ("e131", '\u{e131}'),
    ("e132", '\u{e132}'),
    ("e133", '\u{e133}'),
    ("e134", '\u{e134}'),
    ("e135", '\u{e135}'),
    ("e136", '\u{e136}'),
    ("e137", '\u{e137}'),
    ("e138", '\u{e138}'),
    ("e139", '\u{e139}'),
    ("e13a", '\u{e13a}'),
    ("e13b", '\u{e13b}'),
    ("e13c", '\u{e13c}'),
    ("e13d", '\u{e13d}'),
    ("e13e", '\u{e13e}'),
    ("e13f", '\u{e13f}'),
    ("e140", '\u{e140}'),
    ("e141", '\u{e141}'),
    ("e142", '\u{e142}'),
    ("e143", '\u{e143}'),
    ("e144", '\u{e144}'),
    ("e145", '\u{e145}'),
    ("e146", '\u{e146}'),
    ("e147", '\u{e147}'),
    ("e148", '\u{e148}'),
    ("e149", '\u{e149}'),
    ("e14a", '\u{e14a}'),
    ("e14b", '\u{e14b}'),
    ("e14c", '\u{e14c}'),
    ("e14d", '\u{e14d}'),
    ("e14e", '\u{e14e}'),
    ("e14f", '\u{e14f}'),
    ("e150", '\u{e150}'),
    ("e151", '\u{e151}'),
    ("e152", '\u{e152}'),
    ("e153", '\u{e153}'),
    ("e154", '\u{e154}'),
    ("e155", '\u{e155}'),
    ("e156", '\u{e156}'),
    ("e157", '\u{e157}'),
    ("e158", '\u{e158}'),
    ("e159", '\u{e159}'),
    ("e15a", '\u{e15a}'),
    ("e15b", '\u{e15b}'),
    ("e15c", '\u{e15c}'),
    ("e15d", '\u{e15d}'),
    ("e15e", '\u{e15e}'),
    ("e15f", '\u{e15f}'),
    ("e160", '\u{e160}'),
    ("e161", '\u{e161}'),
    ("e162", '\u{e162}'),
    ("e163", '\u{e163}'),
    ("e164", '\u{e164}'),
    ("e165", '\u{e165}'),
    ("e166", '\u{e166}'),
    ("e167", '\u{e167}'),
    ("e168", '\u{e168}'),
    ("e169", '\u{e169}'),
    ("e16a", '\u{e16a}'),
    ("e16b", '\u{e16b}'),
    ("e16c", '\u{e16c}'),
    ("e16d", '\u{e16d}'),
    ("e16e", '\u{e16e}'),
    ("e16f", '\u{e16f}'),
    ("e170", '\u{e170}'),
    ("e171", '\u{e171}'),
    ("e172", '\u{e172}'),
    ("e173", '\u{e173}'),
    ("e174", '\u{e174}'),
    ("e175", '\u{e175}'),
    ("e176", '\u{e176}'),
    ("e177", '\u{e177}'),
    ("e178", '\u{e178}'),
    ("e179", '\u{e179}'),
    ("e17a", '\u{e17a}'),
    ("e17b", '\u{e17b}'),
    ("e17c", '\u{e17c}'),
    ("e17d", '\u{e17d}'),
    ("e17e", '\u{e17e}'),
    ("e17f", '\u{e17f}'),
    ("e180", '\u{e180}'),
    ("e181", '\u{e181}'),
    ("e182", '\u{e182}'),
    ("e183", '\u{e183}'),
    ("e184", '\u{e184}'),
    ("e185", '\u{e185}'),
    ("e186", '\u{e186}'),
    ("e187", '\u{e187}'),
    ("e188", '\u{e188}'),
    ("e189", '\u{e189}'),
    ("e18a", '\u{e18a}'),
    ("e18b", '\u{e18b}'),
    ("e18c", '\u{e18c}'),
    ("e18d", '\u{e18d}'),
    ("e18e", '\u{e18e}'),
    ("e18f", '\u{e18f}'),
    ("e190", '\u{e190}'),
    ("e191", '\u{e191}'),
    ("e192", '\u{e192}'),
    ("e193", '\u{e193}'),
    ("e194", '\u{e194}'),
    ("e195", '\u{e195}'),
    ("e196", '\u{e196}'),
    ("e197", '\u{e197}'),
    ("e198", '\u{e198}'),
    ("e199", '\u{e199}'),
    ("e19a", '\u{e19a}'),
    ("e19b", '\u{e19b}'),
    ("e19c", '\u{e19c}'),
    ("e19d", '\u{e19d}'),
    ("e19e", '\u{e19e}'),
    ("e19f", '\u{e19f}'),
    ("e1a0", '\u{e1a0}'),
    ("e1a1", '\u{e1a1}'),
    ("e1a2", '\u{e1a2}'),
    ("e1a3", '\u{e1a3}'),
    ("e1a4", '\u{e1a4}'),
    ("e1a5", '\u{e1a5}'),
    ("e1a6", '\u{e1a6}'),
    ("e1a7", '\u{e1a7}'),
    ("e1a8", '\u{e1a8}'),
    ("e1a9", '\u{e1a9}'),
    ("e1aa", '\u{e1aa}'),
    ("e1ab", '\u{e1ab}'),
    ("e1ac", '\u{e1ac}'),
    ("e1ad", '\u{e1ad}'),
    ("e1ae", '\u{e1ae}'),
    ("e1af", '\u{e1af}'),
    ("e1b0", '\u{e1b0}'),
    ("e1b1", '\u{e1b1}'),
    ("e1b2", '\u{e1b2}'),
    ("e1b3", '\u{e1b3}'),
    ("e1b4", '\u{e1b4}'),
    ("e1b5", '\u{e1b5}'),
    ("e1b6", '\u{e1b6}'),
    ("e1b7", '\u{e1b7}'),
    ("e1b8", '\u{e1b8}'),
    ("e1b9", '\u{e1b9}'),
    ("e1ba", '\u{e1ba}'),
    ("e1bb", '\u{e1bb}'),
    ("e1bc", '\u{e1bc}'),
    ("e1bd", '\u{e1bd}'),
    ("e1be", '\u{e1be}'),
    ("e1bf", '\u{e1bf}'),
    ("e1c0", '\u{e1c0}'),
    ("e1c1", '\u{e1c1}'),
    ("e1c2", '\u{e1c2}'),
    ("e1c3", '\u{e1c3}'),
    ("e1c4", '\u{e1c4}'),
    ("e1c5", '\u{e1c5}'),
    ("e1c6", '\u{e1c6}'),
    ("e1c7", '\u{e1c7}'),
    ("e1c8", '\u{e1c8}'),
    ("e1c9", '\u{e1c9}'),
    ("e1ca", '\u{e1ca}'),
    ("e1cb", '\u{e1cb}'),
    ("e1cc", '\u{e1cc}'),
    ("e1cd", '\u{e1cd}'),
    ("e1ce", '\u{e1ce}'),
    ("e1cf", '\u{e1cf}'),
    ("e1d0", '\u{e1d0}'),
    ("e1d1", '\u{e1d1}'),
    ("e1d2", '\u{e1d2}'),
    ("e1d3", '\u{e1d3}'),
    ("e1d4", '\u{e1d4}'),
    ("e1d5", '\u{e1d5}'),
    ("e1d6", '\u{e1d6}'),
    ("e1d7", '\u{e1d7}'),
    ("e1d8", '\u{e1d8}'),
    ("e1d9", '\u{e1d9}'),
    ("e1da", '\u{e1da}'),
    ("e1db", '\u{e1db}'),
    ("e1dc", '\u{e1dc}'),
    ("e1dd", '\u{e1dd}'),
    ("e1de", '\u{e1de}'),
    ("e1df", '\u{e1df}'),
    ("e1e0", '\u{e1e0}'),
    ("e1e1", '\u{e1e1}'),
    ("e1e2", '\u{e1e2}'),
    ("e1e3", '\u{e1e3}'),
    ("e1e4", '\u{e1e4}'),
    ("e1e5", '\u{e1e5}'),
    ("e1e6", '\u{e1e6}'),
    ("e1e7", '\u{e1e7}'),
    ("e1e8", '\u{e1e8}'),
    ("e1e9", '\u{e1e9}'),
    ("e1ea", '\u{e1ea}'),
    ("e1eb", '\u{e1eb}'),
    ("e1ec", '\u{e1ec}'),
    ("e1ed", '\u{e1ed}'),
    ("e1ee", '\u{e1ee}'),
    ("e1ef", '\u{e1ef}'),
    ("e1f0", '\u{e1f0}'),
    ("e1f1", '\u{e1f1}'),
    ("e1f2", '\u{e1f2}'),
    ("e1f3", '\u{e1f3}'),
    ("e1f4", '\u{e1f4}'),
    ("e1f5", '\u{e1f5}'),
    ("e1f6", '\u{e1f6}'),
    ("e1f7", '\u{e1f7}'),
    ("e1f8", '\u{e1f8}'),
    ("e1f9", '\u{e1f9}'),
    ("e1fa", '\u{e1fa}'),
    ("e1fb", '\u{e1fb}'),
    ("e1fc", '\u{e1fc}'),
    ("e1fd", '\u{e1fd}'),
    ("e1fe", '\u{e1fe}'),
    ("e1ff", '\u{e1ff}'),
    ("e200", '\u{e200}'),
    ("e201", '\u{e201}'),
    ("e202", '\u{e202}'),
    ("e203", '\u{e203}'),
    ("e204", '\u{e204}'),
    ("e205", '\u{e205}'),
    ("e206", '\u{e206}'),
    ("e207", '\u{e207}'),
    ("e208", '\u{e208}'),
    ("e209", '\u{e209}'),
    ("e20a", '\u{e20a}'),
    ("e20b", '\u{e20b}'),
    ("e20c", '\u{e20c}'),
    ("e20d", '\u{e20d}'),
    ("e20e", '\u{e20e}'),
    ("e20f", '\u{e20f}'),
    ("e210", '\u{e210}'),
    ("e211", '\u{e211}'),
    ("e212", '\u{e212}'),
    ("e213", '\u{e213}'),
    ("e214", '\u{e214}'),
    ("e215", '\u{e215}'),
    ("e216", '\u{e216}'),
    ("e217", '\u{e217}'),
    ("e218", '\u{e218}'),
    ("e219", '\u{e219}'),
    ("e21a", '\u{e21a}'),
    ("e21b", '\u{e21b}'),
    ("e21c", '\u{e21c}'),
    ("e21d", '\u{e21d}'),
    ("e21e", '\u{e21e}'),
    ("e21f", '\u{e21f}'),
    ("e220", '\u{e220}'),
    ("e221", '\u{e221}'),
    ("e222", '\u{e222}'),
    ("e223", '\u{e223}'),
    ("e224", '\u{e224}'),
    ("e225", '\u{e225}'),
    ("e226", '\u{e226}'),
    ("e227", '\u{e227}'),
    ("e228", '\u{e228}'),
    ("e229", '\u{e229}'),
    ("e22a", '\u{e22a}'),
    ("e22b", '\u{e22b}'),
    ("e22c", '\u{e22c}'),
    ("e22d", '\u{e22d}'),
    ("e22e", '\u{e22e}'),
    ("e22f", '\u{e22f}'),
    ("e230", '\u{e230}'),
    ("e231", '\u{e231}'),
    ("e232", '\u{e232}'),
    ("e233", '\u{e233}'),
    ("e234", '\u{e234}'),
    ("e235", '\u{e235}'),
    ("e236", '\u{e236}'),
    ("e237", '\u{e237}'),
    ("e238", '\u{e238}'),
    ("e239", '\u{e239}'),
    ("e23a", '\u{e23a}'),
    ("e23b", '\u{e23b}'),
    ("e23c", '\u{e23c}'),
    ("e23d", '\u{e23d}'),
    ("e23e", '\u{e23e}'),
    ("e23f", '\u{e23f}'),
    ("e240", '\u{e240}'),
    ("e241", '\u{e241}'),
    ("e242", '\u{e242}'),
    ("e243", '\u{e243}'),
    ("e244", '\u{e244}'),
    ("e245", '\u{e245}'),
    ("e246", '\u{e246}'),
    ("e247", '\u{e247}'),
    ("e248", '\u{e248}'),
    ("e249", '\u{e249}'),
    ("e24a", '\u{e24a}'),
    ("e24b", '\u{e24b}'),
    ("e24c", '\u{e24c}'),
    ("e24d", '\u{e24d}'),
    ("e24e", '\u{e24e}'),
    ("e24f", '\u{e24f}'),
    ("e250", '\u{e250}'),
    ("e251", '\u{e251}'),
    ("e252", '\u{e252}'),
    ("e253", '\u{e253}'),
    ("e254", '\u{e254}'),
    ("e255", '\u{e255}'),
    ("e256", '\u{e256}'),
    ("e257", '\u{e257}'),
    ("e258", '\u{e258}'),
    ("e259", '\u{e259}'),
    ("e25a", '\u{e25a}'),
    ("e25b", '\u{e25b}'),
    ("e25c", '\u{e25c}'),
    ("e25d", '\u{e25d}'),
    ("e25e", '\u{e25e}'),
    ("e25f", '\u{e25f}'),
    ("e260", '\u{e260}'),
    ("e261", '\u{e261}'),
    ("e262", '\u{e262}'),
    ("e263", '\u{e263}'),
    ("e264", '\u{e264}'),
    ("e265", '\u{e265}'),
    ("e266", '\u{e266}'),
    ("e267", '\u{e267}'),
    ("e268", '\u{e268}'),
    ("e269", '\u{e269}'),
    ("e26a", '\u{e26a}'),
    ("e26b", '\u{e26b}'),
    ("e26c", '\u{e26c}'),
    ("e26d", '\u{e26d}'),
    ("e26e", '\u{e26e}'),
    ("e26f", '\u{e26f}'),
    ("e270", '\u{e270}'),
    ("e271", '\u{e271}'),
    ("e272", '\u{e272}'),
    ("e273", '\u{e273}'),
    ("e274", '\u{e274}'),
    ("e275", '\u{e275}'),
    ("e276", '\u{e276}'),
    ("e277", '\u{e277}'),
    ("e278", '\u{e278}'),
    ("e279", '\u{e279}'),
    ("e27a", '\u{e27a}'),
    ("e27b", '\u{e27b}'),
    ("e27c", '\u{e27c}'),
    ("e27d", '\u{e27d}'),
    ("e27e", '\u{e27e}'),
    ("e27f", '\u{e27f}'),
    ("e280", '\u{e280}'),
    ("e281", '\u{e281}'),
    ("e282", '\u{e282}'),
    ("e283", '\u{e283}'),
    ("e284", '\u{e284}'),
    ("e285", '\u{e285}'),
    ("e286", '\u{e286}'),
    ("e287", '\u{e287}'),
    ("e288", '\u{e288}'),
    ("e289", '\u{e289}'),
    ("e28a", '\u{e28a}'),
    ("e28b", '\u{e28b}'),
    ("e28c", '\u{e28c}'),
    ("e28d", '\u{e28d}'),
    ("e28e", '\u{e28e}'),
    ("e28f", '\u{e28f}'),
    ("e290", '\u{e290}'),
    ("e291", '\u{e291}'),
    ("e292", '\u{e292}'),
    ("e293", '\u{e293}'),
    ("e294", '\u{e294}'),
    ("e295", '\u{e295}'),
    ("e296", '\u{e296}'),
    ("e297", '\u{e297}'),
    ("e298", '\u{e298}'),
    ("e299", '\u{e299}'),
    ("e29a", '\u{e29a}'),
    ("e29b", '\u{e29b}'),
    ("e29c", '\u{e29c}'),
    ("e29d", '\u{e29d}'),
    ("e29e", '\u{e29e}'),
    ("e29f", '\u{e29f}'),
    ("e2a0", '\u{e2a0}'),
    ("e2a1", '\u{e2a1}'),
    ("e2a2", '\u{e2a2}'),
    ("e2a3", '\u{e2a3}'),
    ("e2a4", '\u{e2a4}'),
    ("e2a5", '\u{e2a5}'),
    ("e2a6", '\u{e2a6}'),
    ("e2a7", '\u{e2a7}'),
    ("e2a8", '\u{e2a8}'),
    ("e2a9", '\u{e2a9}'),
    ("e2aa", '\u{e2aa}'),
    ("e2ab", '\u{e2ab}'),
    ("e2ac", '\u{e2ac}'),
    ("e2ad", '\u{e2ad}'),
    ("e2ae", '\u{e2ae}'),
    ("e2af", '\u{e2af}'),
    ("e2b0", '\u{e2b0}'),
    ("e2b1", '\u{e2b1}'),
    ("e2b2", '\u{e2b2}'),
    ("e2b3", '\u{e2b3}'),
    ("e2b4", '\u{e2b4}'),
    ("e2b5", '\u{e2b5}'),
    ("e2b6", '\u{e2b6}'),
    ("e2b7", '\u{e2b7}'),
    ("e2b8", '\u{e2b8}'),
    ("e2b9", '\u{e2b9}'),
    ("e2ba", '\u{e2ba}'),
    ("e2bb", '\u{e2bb}'),
    ("e2bc", '\u{e2bc}'),
    ("e2bd", '\u{e2bd}'),
    ("e2be", '\u{e2be}'),
    ("e2bf", '\u{e2bf}'),
    ("e2c0", '\u{e2c0}'),
    ("e2c1", '\u{e2c1}'),
    ("e2c2", '\u{e2c2}'),
    ("e2c3", '\u{e2c3}'),
    ("e2c4", '\u{e2c4}'),
    ("e2c5", '\u{e2c5}'),
    ("e2c6", '\u{e2c6}'),
    ("e2c7", '\u{e2c7}'),
    ("e2c8", '\u{e2c8}'),
    ("e2c9", '\u{e2c9}'),
    ("e2ca", '\u{e2ca}'),
    ("e2cb", '\u{e2cb}'),
    ("e2cc", '\u{e2cc}'),
    ("e2cd", '\u{e2cd}'),
    ("e2ce", '\u{e2ce}'),
    ("e2cf", '\u{e2cf}'),
    ("e2d0", '\u{e2d0}'),
    ("e2d1", '\u{e2d1}'),
    ("e2d2", '\u{e2d2}'),
    ("e2d3", '\u{e2d3}'),
    ("e2d4", '\u{e2d4}'),
    ("e2d5", '\u{e2d5}'),
    ("e2d6", '\u{e2d6}'),
    ("e2d7", '\u{e2d7}'),
    ("e2d8", '\u{e2d8}'),
    ("e2d9", '\u{e2d9}'),
    ("e2da", '\u{e2da}'),
    ("e2db", '\u{e2db}'),
    ("e2dc", '\u{e2dc}'),
    ("e2dd", '\u{e2dd}'),
    ("e2de", '\u{e2de}'),
    ("e2df", '\u{e2df}'),
    ("e2e0", '\u{e2e0}'),
    ("e2e1", '\u{e2e1}'),
    ("e2e2", '\u{e2e2}'),
    ("e2e3", '\u{e2e3}'),
    ("e2e4", '\u{e2e4}'),
    ("e2e5", '\u{e2e5}'),
    ("e2e6", '\u{e2e6}'),
    ("e2e7", '\u{e2e7}'),
    ("e2e8", '\u{e2e8}'),
    ("e2e9", '\u{e2e9}'),
    ("e2ea", '\u{e2ea}'),
    ("e2eb", '\u{e2eb}'),
    ("e2ec", '\u{e2ec}'),
    ("e2ed", '\u{e2ed}'),
    ("e2ee", '\u{e2ee}'),
    ("e2ef", '\u{e2ef}'),
    ("e2f0", '\u{e2f0}'),
    ("e2f1", '\u{e2f1}'),
    ("e2f2", '\u{e2f2}'),
    ("e2f3", '\u{e2f3}'),
    ("e2f4", '\u{e2f4}'),
    ("e2f5", '\u{e2f5}'),
    ("e2f6", '\u{e2f6}'),
    ("e2f7", '\u{e2f7}'),
    ("e2f8", '\u{e2f8}'),
    ("e2f9", '\u{e2f9}'),
    ("e2fa", '\u{e2fa}'),
    ("e2fb", '\u{e2fb}'),
    ("e2fc", '\u{e2fc}'),
    ("e2fd", '\u{e2fd}'),
    ("e2fe", '\u{e2fe}'),
    ("e2ff", '\u{e2ff}'),
    ("e300", '\u{e300}'),
    ("e301", '\u{e301}'),
    ("e302", '\u{e302}'),
    ("e303", '\u{e303}'),
    ("e304", '\u{e304}'),
    ("e305", '\u{e305}'),
    ("e306", '\u{e306}'),
    ("e307", '\u{e307}'),
    ("e308", '\u{e308}'),
    ("e309", '\u{e309}'),
    ("e30a", '\u{e30a}'),
    ("e30b", '\u{e30b}'),
    ("e30c", '\u{e30c}'),
    ("e30d", '\u{e30d}'),
    ("e30e", '\u{e30e}'),
    ("e30f", '\u{e30f}'),
    ("e310", '\u{e310}'),
    ("e311", '\u{e311}'),
    ("e312", '\u{e312}'),
    ("e313", '\u{e313}'),
    ("e314", '\u{e314}'),
    ("e315", '\u{e315}'),
    ("e316", '\u{e316}'),
    ("e317", '\u{e317}'),
    ("e318", '\u{e318}'),
    ("e319", '\u{e319}'),
    ("e31a", '\u{e31a}'),
    ("e31b", '\u{e31b}'),
    ("e31c", '\u{e31c}'),
    ("e31d", '\u{e31d}'),
    ("e31e", '\u{e31e}'),
    ("e31f", '\u{e31f}'),
    ("e320", '\u{e320}'),
    ("e321", '\u{e321}'),
    ("e322", '\u{e322}'),
    ("e323", '\u{e323}'),
    ("e324", '\u{e324}'),
    ("e325", '\u{e325}'),
    ("e326", '\u{e326}'),
    ("e327", '\u{e327}'),
    ("e328", '\u{e328}'),
    ("e329", '\u{e329}'),
    ("e32a", '\u{e32a}'),
    ("e32b", '\u{e32b}'),
    ("e32c", '\u{e32c}'),
    ("e32d", '\u{e32d}'),
    ("e32e", '\u{e32e}'),
    ("e32f", '\u{e32f}'),
    ("e330", '\u{e330}'),
    ("e331", '\u{e331}'),
    ("e332", '\u{e332}'),
    ("e333", '\u{e333}'),
    ("e334", '\u{e334}'),
    ("e335", '\u{e335}'),
    ("e336", '\u{e336}'),
    ("e337", '\u{e337}'),
    ("e338", '\u{e338}'),
    ("e339", '\u{e339}'),
    ("e33a", '\u{e33a}'),
    ("e33b", '\u{e33b}'),
    ("e33c", '\u{e33c}'),
    ("e33d", '\u{e33d}'),
    ("e33e", '\u{e33e}'),
    ("e33f", '\u{e33f}'),
    ("e340", '\u{e340}'),
    ("e341", '\u{e341}'),
    ("e342", '\u{e342}'),
    ("e343", '\u{e343}'),
    ("e344", '\u{e344}'),
    ("e345", '\u{e345}'),
    ("e346", '\u{e346}'),
    ("e347", '\u{e347}'),
    ("e348", '\u{e348}'),
    ("e349", '\u{e349}'),
    ("e34a", '\u{e34a}'),
    ("e34b", '\u{e34b}'),
    ("e34c", '\u{e34c}'),
    ("e34d", '\u{e34d}'),
    ("e34e", '\u{e34e}'),
    ("e34f", '\u{e34f}'),
    ("e350", '\u{e350}'),
    ("e351", '\u{e351}'),
    ("e352", '\u{e352}'),
    ("e353", '\u{e353}'),
    ("e354", '\u{e354}'),
    ("e355", '\u{e355}'),
    ("e356", '\u{e356}'),
    ("e357", '\u{e357}'),
    ("e358", '\u{e358}'),
    ("e359", '\u{e359}'),
    ("e35a", '\u{e35a}'),
    ("e35b", '\u{e35b}'),
    ("e35c", '\u{e35c}'),
    ("e35d", '\u{e35d}'),
    ("e35e", '\u{e35e}'),
    ("e35f", '\u{e35f}'),
    ("e360", '\u{e360}'),
    ("e361", '\u{e361}'),
    ("e362", '\u{e362}'),
    ("e363", '\u{e363}'),
    ("e364", '\u{e364}'),
    ("e365", '\u{e365}'),
    ("e366", '\u{e366}'),
    ("e367", '\u{e367}'),
    ("e368", '\u{e368}'),
    ("e369", '\u{e369}'),
    ("e36a", '\u{e36a}'),
    ("e36b", '\u{e36b}'),
    ("e36c", '\u{e36c}'),
    ("e36d", '\u{e36d}'),
    ("e36e", '\u{e36e}'),
    ("e36f", '\u{e36f}'),
    ("e370", '\u{e370}'),
    ("e371", '\u{e371}'),
    ("e372", '\u{e372}'),
    ("e373", '\u{e373}'),
    ("e374", '\u{e374}'),
    ("e375", '\u{e375}'),
    ("e376", '\u{e376}'),
    ("e377", '\u{e377}'),
    ("e378", '\u{e378}'),
    ("e379", '\u{e379}'),
    ("e37a", '\u{e37a}'),
    ("e37b", '\u{e37b}'),
    ("e37c", '\u{e37c}'),
    ("e37d", '\u{e37d}'),
    ("e37e", '\u{e37e}'),
    ("e37f", '\u{e37f}'),
    ("e380", '\u{e380}'),
    ("e381", '\u{e381}'),
    ("e382", '\u{e382}'),
    ("e383", '\u{e383}'),
    ("e384", '\u{e384}'),
    ("e385", '\u{e385}'),
    ("e386", '\u{e386}'),
    ("e387", '\u{e387}'),
    ("e388", '\u{e388}'),
    ("e389", '\u{e389}'),
    ("e38a", '\u{e38a}'),
    ("e38b", '\u{e38b}'),
    ("e38c", '\u{e38c}'),
    ("e38d", '\u{e38d}'),
    ("e38e", '\u{e38e}'),
    ("e38f", '\u{e38f}'),
    ("e390", '\u{e390}'),
    ("e391", '\u{e391}'),
    ("e392", '\u{e392}'),
    ("e393", '\u{e393}'),
    ("e394", '\u{e394}'),
    ("e395", '\u{e395}'),
    ("e396", '\u{e396}'),
    ("e397", '\u{e397}'),
    ("e398", '\u{e398}'),
    ("e399", '\u{e399}'),
    ("e39a", '\u{e39a}'),
    ("e39b", '\u{e39b}'),
    ("e39c", '\u{e39c}'),
    ("e39d", '\u{e39d}'),
    ("e39e", '\u{e39e}'),
    ("e39f", '\u{e39f}'),
    ("e3a0", '\u{e3a0}'),
    ("e3a1", '\u{e3a1}'),
    ("e3a2", '\u{e3a2}'),
    ("e3a3", '\u{e3a3}'),
    ("e3a4", '\u{e3a4}'),
    ("e3a5", '\u{e3a5}'),
    ("e3a6", '\u{e3a6}'),
    ("e3a7", '\u{e3a7}'),
    ("e3a8", '\u{e3a8}'),
    ("e3a9", '\u{e3a9}'),
    ("e3aa", '\u{e3aa}'),
    ("e3ab", '\u{e3ab}'),
    ("e3ac", '\u{e3ac}'),
    ("e3ad", '\u{e3ad}'),
    ("e3ae", '\u{e3ae}'),
    ("e3af", '\u{e3af}'),
    ("e3b0", '\u{e3b0}'),
    ("e3b1", '\u{e3b1}'),
    ("e3b2", '\u{e3b2}'),
    ("e3b3", '\u{e3b3}'),
    ("e3b4", '\u{e3b4}'),
    ("e3b5", '\u{e3b5}'),
    ("e3b6", '\u{e3b6}'),
    ("e3b7", '\u{e3b7}'),
    ("e3b8", '\u{e3b8}'),
    ("e3b9", '\u{e3b9}'),
    ("e3ba", '\u{e3ba}'),
    ("e3bb", '\u{e3bb}'),
    ("e3bc", '\u{e3bc}'),
    ("e3bd", '\u{e3bd}'),
    ("e3be", '\u{e3be}'),
    ("e3bf", '\u{e3bf}'),
    ("e3c0", '\u{e3c0}'),
    ("e3c1", '\u{e3c1}'),
    ("e3c2", '\u{e3c2}'),
    ("e3c3", '\u{e3c3}'),
    ("e3c4", '\u{e3c4}'),
    ("e3c5", '\u{e3c5}'),
    ("e3c6", '\u{e3c6}'),
    ("e3c7", '\u{e3c7}'),
    ("e3c8", '\u{e3c8}'),
    ("e3c9", '\u{e3c9}'),
    ("e3ca", '\u{e3ca}'),
    ("e3cb", '\u{e3cb}'),
    ("e3cc", '\u{e3cc}'),
    ("e3cd", '\u{e3cd}'),
    ("e3ce", '\u{e3ce}'),
    ("e3cf", '\u{e3cf}'),
    ("e3d0", '\u{e3d0}'),
    ("e3d1", '\u{e3d1}'),
    ("e3d2", '\u{e3d2}'),
    ("e3d3", '\u{e3d3}'),
    ("e3d4", '\u{e3d4}'),
    ("e3d5", '\u{e3d5}'),
    ("e3d6", '\u{e3d6}'),
    ("e3d7", '\u{e3d7}'),
    ("e3d8", '\u{e3d8}'),
    ("e3d9", '\u{e3d9}'),
    ("e3da", '\u{e3da}'),
    ("e3db", '\u{e3db}'),
    ("e3dc", '\u{e3dc}'),
    ("e3dd", '\u{e3dd}'),
    ("e3de", '\u{e3de}'),
    ("e3df", '\u{e3df}'),
    ("e3e0", '\u{e3e0}'),
    ("e3e1", '\u{e3e1}'),
    ("e3e2", '\u{e3e2}'),
    ("e3e3", '\u{e3e3}'),
    ("e3e4", '\u{e3e4}'),
    ("e3e5", '\u{e3e5}'),
    ("e3e6", '\u{e3e6}'),
    ("e3e7", '\u{e3e7}'),
    ("e3e8", '\u{e3e8}'),
    ("e3e9", '\u{e3e9}'),
    ("e3ea", '\u{e3ea}'),
    ("e3eb", '\u{e3eb}'),
    ("e3ec", '\u{e3ec}'),
    ("e3ed", '\u{e3ed}'),
    ("e3ee", '\u{e3ee}'),
    ("e3ef", '\u{e3ef}'),
    ("e3f0", '\u{e3f0}'),
    ("e3f1", '\u{e3f1}'),
    ("e3f2", '\u{e3f2}'),
    ("e3f3", '\u{e3f3}'),
    ("e3f4", '\u{e3f4}'),
    ("e3f5", '\u{e3f5}'),
    ("e3f6", '\u{e3f6}'),
    ("e3f7", '\u{e3f7}'),
    ("e3f8", '\u{e3f8}'),
    ("e3f9", '\u{e3f9}'),
    ("e3fa", '\u{e3fa}'),
    ("e3fb", '\u{e3fb}'),
    ("e3fc", '\u{e3fc}'),
    ("e3fd", '\u{e3fd}'),
    ("e3fe", '\u{e3fe}'),
    ("e3ff", '\u{e3ff}'),
    ("e400", '\u{e400}'),
    ("e401", '\u{e401}'),
    ("e402", '\u{e402}'),
    ("e403", '\u{e403}'),
    ("e404", '\u{e404}'),
    ("e405", '\u{e405}'),
    ("e406", '\u{e406}'),
    ("e407", '\u{e407}'),
    ("e408", '\u{e408}'),
    ("e409", '\u{e409}'),
    ("e40a", '\u{e40a}'),
    ("e40b", '\u{e40b}'),
    ("e40c", '\u{e40c}'),
    ("e40d", '\u{e40d}'),
    ("e40e", '\u{e40e}'),
    ("e40f", '\u{e40f}'),
    ("e410", '\u{e410}'),
    ("e411", '\u{e411}'),
    ("e412", '\u{e412}'),
    ("e413", '\u{e413}'),
    ("e414", '\u{e414}'),
    ("e415", '\u{e415}'),
    ("e416", '\u{e416}'),
    ("e417", '\u{e417}'),
    ("e418", '\u{e418}'),
    ("e419", '\u{e419}'),
    ("e41a", '\u{e41a}'),
    ("e41b", '\u{e41b}'),
    ("e41c", '\u{e41c}'),
    ("e41d", '\u{e41d}'),
    ("e41e", '\u{e41e}'),
    ("e41f", '\u{e41f}'),
    ("e420", '\u{e420}'),
    ("e421", '\u{e421}'),
    ("e422", '\u{e422}'),
    ("e423", '\u{e423}'),
    ("e424", '\u{e424}'),
    ("e425", '\u{e425}'),
    ("e426", '\u{e426}'),
    ("e427", '\u{e427}'),
    ("e428", '\u{e428}'),
    ("e429", '\u{e429}'),
    ("e42a", '\u{e42a}'),
    ("e42b", '\u{e42b}'),
    ("e42c", '\u{e42c}'),
    ("e42d", '\u{e42d}'),
    ("e42e", '\u{e42e}'),
    ("e42f", '\u{e42f}'),
    ("e430", '\u{e430}'),
    ("e431", '\u{e431}'),
    ("e432", '\u{e432}'),
    ("e433", '\u{e433}'),
    ("e434", '\u{e434}'),
    ("e435", '\u{e435}'),
    ("e436", '\u{e436}'),
    ("e437", '\u{e437}'),
    ("e438", '\u{e438}'),
    ("e439", '\u{e439}'),
    ("e43a", '\u{e43a}'),
    ("e43b", '\u{e43b}'),
    ("e43c", '\u{e43c}'),
    ("e43d", '\u{e43d}'),
    ("e43e", '\u{e43e}'),
    ("e43f", '\u{e43f}'),
    ("e440", '\u{e440}'),
    ("e441", '\u{e441}'),
    ("e442", '\u{e442}'),
    ("e443", '\u{e443}'),
    ("e444", '\u{e444}'),
    ("e445", '\u{e445}'),
    ("e446", '\u{e446}'),
    ("e447", '\u{e447}'),
    ("e448", '\u{e448}'),
    ("e449", '\u{e449}'),
    ("e44a", '\u{e44a}'),
    ("e44b", '\u{e44b}'),
    ("e44c", '\u{e44c}'),
    ("e44d", '\u{e44d}'),
    ("e44e", '\u{e44e}'),
    ("e44f", '\u{e44f}'),
    ("e450", '\u{e450}'),
    ("e451", '\u{e451}'),
    ("e452", '\u{e452}'),
    ("e453", '\u{e453}'),
    ("e454", '\u{e454}'),
    ("e455", '\u{e455}'),
    ("e456", '\u{e456}'),
    ("e457", '\u{e457}'),
    ("e458", '\u{e458}'),
    ("e459", '\u{e459}'),
    ("e45a", '\u{e45a}'),
    ("e45b", '\u{e45b}'),
    ("e45c", '\u{e45c}'),
    ("e45d", '\u{e45d}'),
    ("e45e", '\u{e45e}'),
    ("e45f", '\u{e45f}'),
    ("e460", '\u{e460}'),
    ("e461", '\u{e461}'),
    ("e462", '\u{e462}'),
    ("e463", '\u{e463}'),
    ("e464", '\u{e464}'),
    ("e465", '\u{e465}'),
    ("e466", '\u{e466}'),
    ("e467", '\u{e467}'),
    ("e468", '\u{e468}'),
    ("e469", '\u{e469}'),
    ("e46a", '\u{e46a}'),
    ("e46b", '\u{e46b}'),
    ("e46c", '\u{e46c}'),
    ("e46d", '\u{e46d}'),
    ("e46e", '\u{e46e}'),
    ("e46f", '\u{e46f}'),
    ("e470", '\u{e470}'),
    ("e471", '\u{e471}'),
    ("e472", '\u{e472}'),
    ("e473", '\u{e473}'),
    ("e474", '\u{e474}'),
    ("e475", '\u{e475}'),
    ("e476", '\u{e476}'),
    ("e477", '\u{e477}'),
    ("e478", '\u{e478}'),
    ("e479", '\u{e479}'),
    ("e47a", '\u{e47a}'),
    ("e47b", '\u{e47b}'),
    ("e47c", '\u{e47c}'),
    ("e47d", '\u{e47d}'),
    ("e47e", '\u{e47e}'),
    ("e47f", '\u{e47f}'),
    ("e480", '\u{e480}'),
    ("e481", '\u{e481}'),
    ("e482", '\u{e482}'),
    ("e483", '\u{e483}'),
    ("e484", '\u{e484}'),
    ("e485", '\u{e485}'),
    ("e486", '\u{e486}'),
    ("e487", '\u{e487}'),
    ("e488", '\u{e488}'),
    ("e489", '\u{e489}'),
    ("e48a", '\u{e48a}'),
    ("e48b", '\u{e48b}'),
    ("e48c", '\u{e48c}'),
    ("e48d", '\u{e48d}'),
    ("e48e", '\u{e48e}'),
    ("e48f", '\u{e48f}'),
    ("e490", '\u{e490}'),
    ("e491", '\u{e491}'),
    ("e492", '\u{e492}'),
    ("e493", '\u{e493}'),
    ("e494", '\u{e494}'),
    ("e495", '\u{e495}'),
    ("e496", '\u{e496}'),
    ("e497", '\u{e497}'),
    ("e498", '\u{e498}'),
    ("e499", '\u{e499}'),
    ("e49a", '\u{e49a}'),
    ("e49b", '\u{e49b}'),
    ("e49c", '\u{e49c}'),
    ("e49d", '\u{e49d}'),
    ("e49e", '\u{e49e}'),
    ("e49f", '\u{e49f}'),
    ("e4a0", '\u{e4a0}'),
    ("e4a1", '\u{e4a1}'),
    ("e4a2", '\u{e4a2}'),
    ("e4a3", '\u{e4a3}'),
    ("e4a4", '\u{e4a4}'),
    ("e4a5", '\u{e4a5}'),
    ("e4a6", '\u{e4a6}'),
    ("e4a7", '\u{e4a7}'),
    ("e4a8", '\u{e4a8}'),
    ("e4a9", '\u{e4a9}'),
    ("e4aa", '\u{e4aa}'),
    ("e4ab", '\u{e4ab}'),
    ("e4ac", '\u{e4ac}'),
    ("e4ad", '\u{e4ad}'),
    ("e4ae", '\u{e4ae}'),
    ("e4af", '\u{e4af}'),
    ("e4b0", '\u{e4b0}'),
    ("e4b1", '\u{e4b1}'),
    ("e4b2", '\u{e4b2}'),
    ("e4b3", '\u{e4b3}'),
    ("e4b4", '\u{e4b4}'),
    ("e4b5", '\u{e4b5}'),
    ("e4b6", '\u{e4b6}'),
    ("e4b7", '\u{e4b7}'),
    ("e4b8", '\u{e4b8}'),
    ("e4b9", '\u{e4b9}'),
    ("e4ba", '\u{e4ba}'),
    ("e4bb", '\u{e4bb}'),
    ("e4bc", '\u{e4bc}'),
    ("e4bd", '\u{e4bd}'),
    ("e4be", '\u{e4be}'),
    ("e4bf", '\u{e4bf}'),
    ("e4c0", '\u{e4c0}'),
    ("e4c1", '\u{e4c1}'),
    ("e4c2", '\u{e4c2}'),
    ("e4c3", '\u{e4c3}'),
    ("e4c4", '\u{e4c4}'),
    ("e4c5", '\u{e4c5}'),
    ("e4c6", '\u{e4c6}'),
    ("e4c7", '\u{e4c7}'),
    ("e4c8", '\u{e4c8}'),
    ("e4c9", '\u{e4c9}'),
    ("e4ca", '\u{e4ca}'),
    ("e4cb", '\u{e4cb}'),
    ("e4cc", '\u{e4cc}'),
    ("e4cd", '\u{e4cd}'),
    ("e4ce", '\u{e4ce}'),
    ("e4cf", '\u{e4cf}'),
    ("e4d0", '\u{e4d0}'),
    ("e4d1", '\u{e4d1}'),
    ("e4d2", '\u{e4d2}'),
    ("e4d3", '\u{e4d3}'),
    ("e4d4", '\u{e4d4}'),
    ("e4d5", '\u{e4d5}'),
    ("e4d6", '\u{e4d6}'),
    ("e4d7", '\u{e4d7}'),
    ("e4d8", '\u{e4d8}'),
    ("e4d9", '\u{e4d9}'),
    ("e4da", '\u{e4da}'),
    ("e4db", '\u{e4db}'),
    ("e4dc", '\u{e4dc}'),
    ("e4dd", '\u{e4dd}'),
    ("e4de", '\u{e4de}'),
    ("e4df", '\u{e4df}'),
    ("e4e0", '\u{e4e0}'),
    ("e4e1", '\u{e4e1}'),
    ("e4e2", '\u{e4e2}'),
    ("e4e3", '\u{e4e3}'),
    ("e4e4", '\u{e4e4}'),
    ("e4e5", '\u{e4e5}'),
    ("e4e6", '\u{e4e6}'),
    ("e4e7", '\u{e4e7}'),
    ("e4e8", '\u{e4e8}'),
    ("e4e9", '\u{e4e9}'),
    ("e4ea", '\u{e4ea}'),
    ("e4eb", '\u{e4eb}'),
    ("e4ec", '\u{e4ec}'),
    ("e4ed", '\u{e4ed}'),
    ("e4ee", '\u{e4ee}'),
    ("e4ef", '\u{e4ef}'),
    ("e4f0", '\u{e4f0}'),
    ("e4f1", '\u{e4f1}'),
    ("e4f2", '\u{e4f2}'),
    ("e4f3", '\u{e4f3}'),
    ("e4f4", '\u{e4f4}'),
    ("e4f5", '\u{e4f5}'),
    ("e4f6", '\u{e4f6}'),
    ("e4f7", '\u{e4f7}'),
    ("e4f8", '\u{e4f8}'),
    ("e4f9", '\u{e4f9}'),
    ("e4fa", '\u{e4fa}'),
    ("e4fb", '\u{e4fb}'),
    ("e4fc", '\u{e4fc}'),
    ("e4fd", '\u{e4fd}'),
    ("e4fe", '\u{e4fe}'),
    ("e4ff", '\u{e4ff}'),
    ("e500", '\u{e500}'),
    ("e501", '\u{e501}'),
    ("e502", '\u{e502}'),
    ("e503", '\u{e503}'),
    ("e504", '\u{e504}'),
    ("e505", '\u{e505}'),
    ("e506", '\u{e506}'),
    ("e507", '\u{e507}'),
    ("e508", '\u{e508}'),
    ("e509", '\u{e509}'),
    ("e50a", '\u{e50a}'),
    ("e50b", '\u{e50b}'),
    ("e50c", '\u{e50c}'),
    ("e50d", '\u{e50d}'),
    ("e50e", '\u{e50e}'),
    ("e50f", '\u{e50f}'),
    ("e510", '\u{e510}'),
    ("e511", '\u{e511}'),
    ("e512", '\u{e512}'),
    ("e513", '\u{e513}'),
    ("e514", '\u{e514}'),
    ("e515", '\u{e515}'),
    ("e516", '\u{e516}'),
    ("e517", '\u{e517}'),
    ("e518", '\u{e518}'),
    ("e519", '\u{e519}'),
    ("e51a", '\u{e51a}'),
    ("e51b", '\u{e51b}'),
    ("e51c", '\u{e51c}'),
    ("e51d", '\u{e51d}'),
    ("e51e", '\u{e51e}'),
    ("e51f", '\u{e51f}'),
    ("e520", '\u{e520}'),
    ("e521", '\u{e521}'),
    ("e522", '\u{e522}'),
    ("e523", '\u{e523}'),
    ("e524", '\u{e524}'),
    ("e525", '\u{e525}'),
    ("e526", '\u{e526}'),
    ("e527", '\u{e527}'),
    ("e528", '\u{e528}'),
    ("e529", '\u{e529}'),
    ("e52a", '\u{e52a}'),
    ("e52b", '\u{e52b}'),
    ("e52c", '\u{e52c}'),
    ("e52d", '\u{e52d}'),
    ("e52e", '\u{e52e}'),
    ("e52f", '\u{e52f}'),
    ("e530", '\u{e530}'),
    ("e531", '\u{e531}'),
    ("e532", '\u{e532}'),
    ("e533", '\u{e533}'),
    ("e534", '\u{e534}'),
    ("e535", '\u{e535}'),
    ("e536", '\u{e536}'),
    ("e537", '\u{e537}'),
    ("e538", '\u{e538}'),
    ("e539", '\u{e539}'),
    ("e53a", '\u{e53a}'),
    ("e53b", '\u{e53b}'),
    ("e53c", '\u{e53c}'),
    ("e53d", '\u{e53d}'),
    ("e53e", '\u{e53e}'),
    ("e53f", '\u{e53f}'),
    ("e540", '\u{e540}'),
    ("e541", '\u{e541}'),
    ("e542", '\u{e542}'),
    ("e543", '\u{e543}'),
    ("e544", '\u{e544}'),
    ("e545", '\u{e545}'),
    ("e546", '\u{e546}'),
    ("e547", '\u{e547}'),
    ("e548", '\u{e548}'),
    ("e549", '\u{e549}'),
    ("e54a", '\u{e54a}'),
    ("e54b", '\u{e54b}'),
    ("e54c", '\u{e54c}'),
    ("e54d", '\u{e54d}'),
    ("e54e", '\u{e54e}'),
    ("e54f", '\u{e54f}'),
    ("e550", '\u{e550}'),
    ("e551", '\u{e551}'),
    ("e552", '\u{e552}'),
    ("e553", '\u{e553}'),
    ("e554", '\u{e554}'),
    ("e555", '\u{e555}'),
    ("e556", '\u{e556}'),
    ("e557", '\u{e557}'),
    ("e558", '\u{e558}'),
    ("e559", '\u{e559}'),
    ("e55a", '\u{e55a}'),
    ("e55b", '\u{e55b}'),
    ("e55c", '\u{e55c}'),
    ("e55d", '\u{e55d}'),
    ("e55e", '\u{e55e}'),
    ("e55f", '\u{e55f}'),
    ("e560", '\u{e560}'),
    ("e561", '\u{e561}'),
    ("e562", '\u{e562}'),
    ("e563", '\u{e563}'),
    ("e564", '\u{e564}'),
    ("e565", '\u{e565}'),
    ("e566", '\u{e566}'),
    ("e567", '\u{e567}'),
    ("e568", '\u{e568}'),
    ("e569", '\u{e569}'),
    ("e56a", '\u{e56a}'),
    ("e56b", '\u{e56b}'),
    ("e56c", '\u{e56c}'),
    ("e56d", '\u{e56d}'),
    ("e56e", '\u{e56e}'),
    ("e56f", '\u{e56f}'),
    ("e570", '\u{e570}'),
    ("e571", '\u{e571}'),
    ("e572", '\u{e572}'),
    ("e573", '\u{e573}'),
    ("e574", '\u{e574}'),
    ("e575", '\u{e575}'),
    ("e576", '\u{e576}'),
    ("e577", '\u{e577}'),
    ("e578", '\u{e578}'),
    ("e579", '\u{e579}'),
    ("e57a", '\u{e57a}'),
    ("e57b", '\u{e57b}'),
    ("e57c", '\u{e57c}'),
    ("e57d", '\u{e57d}'),
    ("e57e", '\u{e57e}'),
    ("e57f", '\u{e57f}'),
    ("e580", '\u{e580}'),
    ("e581", '\u{e581}'),
    ("e582", '\u{e582}'),
    ("e583", '\u{e583}'),
    ("e584", '\u{e584}'),
    ("e585", '\u{e585}'),
    ("e586", '\u{e586}'),
    ("e587", '\u{e587}'),
    ("e588", '\u{e588}'),
    ("e589", '\u{e589}'),
    ("e58a", '\u{e58a}'),
    ("e58b", '\u{e58b}'),
    ("e58c", '\u{e58c}'),
    ("e58d", '\u{e58d}'),
    ("e58e", '\u{e58e}'),
    ("e58f", '\u{e58f}'),
    ("e590", '\u{e590}'),
    ("e591", '\u{e591}'),
    ("e592", '\u{e592}'),
    ("e593", '\u{e593}'),
    ("e594", '\u{e594}'),
    ("e595", '\u{e595}'),
    ("e596", '\u{e596}'),
    ("e597", '\u{e597}'),
    ("e598", '\u{e598}'),
    ("e599", '\u{e599}'),
    ("e59a", '\u{e59a}'),
    ("e59b", '\u{e59b}'),
    ("e59c", '\u{e59c}'),
    ("e59d", '\u{e59d}'),
    ("e59e", '\u{e59e}'),
    ("e59f", '\u{e59f}'),
    ("e5a0", '\u{e5a0}'),
    ("e5a1", '\u{e5a1}'),
    ("e5a2", '\u{e5a2}'),
    ("e5a3", '\u{e5a3}'),
    ("e5a4", '\u{e5a4}'),
    ("e5a5", '\u{e5a5}'),
    ("e5a6", '\u{e5a6}'),
    ("e5a7", '\u{e5a7}'),
    ("e5a8", '\u{e5a8}'),
    ("e5a9", '\u{e5a9}'),
    ("e5aa", '\u{e5aa}'),
    ("e5ab", '\u{e5ab}'),
    ("e5ac", '\u{e5ac}'),
    ("e5ad", '\u{e5ad}'),
    ("e5ae", '\u{e5ae}'),
    ("e5af", '\u{e5af}'),
    ("e5b0", '\u{e5b0}'),
    ("e5b1", '\u{e5b1}'),
    ("e5b2", '\u{e5b2}'),
    ("e5b3", '\u{e5b3}'),
    ("e5b4", '\u{e5b4}'),
    ("e5b5", '\u{e5b5}'),
    ("e5b6", '\u{e5b6}'),
    ("e5b7", '\u{e5b7}'),
    ("e5b8", '\u{e5b8}'),
    ("e5b9", '\u{e5b9}'),
    ("e5ba", '\u{e5ba}'),
    ("e5bb", '\u{e5bb}'),
    ("e5bc", '\u{e5bc}'),
    ("e5bd", '\u{e5bd}'),
    ("e5be", '\u{e5be}'),
    ("e5bf", '\u{e5bf}'),
    ("e5c0", '\u{e5c0}'),
    ("e5c1", '\u{e5c1}'),
    ("e5c2", '\u{e5c2}'),
    ("e5c3", '\u{e5c3}'),
    ("e5c4", '\u{e5c4}'),
    ("e5c5", '\u{e5c5}'),
    ("e5c6", '\u{e5c6}'),
    ("e5c7", '\u{e5c7}'),
    ("e5c8", '\u{e5c8}'),
    ("e5c9", '\u{e5c9}'),
    ("e5ca", '\u{e5ca}'),
    ("e5cb", '\u{e5cb}'),
    ("e5cc", '\u{e5cc}'),
    ("e5cd", '\u{e5cd}'),
    ("e5ce", '\u{e5ce}'),
    ("e5cf", '\u{e5cf}'),
    ("e5d0", '\u{e5d0}'),
    ("e5d1", '\u{e5d1}'),
    ("e5d2", '\u{e5d2}'),
    ("e5d3", '\u{e5d3}'),
    ("e5d4", '\u{e5d4}'),
    ("e5d5", '\u{e5d5}'),
    ("e5d6", '\u{e5d6}'),
    ("e5d7", '\u{e5d7}'),
    ("e5d8", '\u{e5d8}'),
    ("e5d9", '\u{e5d9}'),
    ("e5da", '\u{e5da}'),
    ("e5db", '\u{e5db}'),
    ("e5dc", '\u{e5dc}'),
    ("e5dd", '\u{e5dd}'),
    ("e5de", '\u{e5de}'),
    ("e5df", '\u{e5df}'),
    ("e5e0", '\u{e5e0}'),
    ("e5e1", '\u{e5e1}'),
    ("e5e2", '\u{e5e2}'),
    ("e5e3", '\u{e5e3}'),
    ("e5e4", '\u{e5e4}'),
    ("e5e5", '\u{e5e5}'),
    ("e5e6", '\u{e5e6}'),
    ("e5e7", '\u{e5e7}'),
    ("e5e8", '\u{e5e8}'),
    ("e5e9", '\u{e5e9}'),
    ("e5ea", '\u{e5ea}'),
    ("e5eb", '\u{e5eb}'),
    ("e5ec", '\u{e5ec}'),
    ("e5ed", '\u{e5ed}'),
    ("e5ee", '\u{e5ee}'),
    ("e5ef", '\u{e5ef}'),
    ("e5f0", '\u{e5f0}'),
    ("e5f1", '\u{e5f1}'),
    ("e5f2", '\u{e5f2}'),
    ("e5f3", '\u{e5f3}'),
    ("e5f4", '\u{e5f4}'),
    ("e5f5", '\u{e5f5}'),
    ("e5f6", '\u{e5f6}'),
    ("e5f7", '\u{e5f7}'),
    ("e5f8", '\u{e5f8}'),
    ("e5f9", '\u{e5f9}'),
    ("e5fa", '\u{e5fa}'),
    ("e5fb", '\u{e5fb}'),
    ("e5fc", '\u{e5fc}'),
    ("e5fd", '\u{e5fd}'),
    ("e5fe", '\u{e5fe}'),
    ("e5ff", '\u{e5ff}'),
    ("e600", '\u{e600}'),
    ("e601", '\u{e601}'),
    ("e602", '\u{e602}'),
    ("e603", '\u{e603}'),
    ("e604", '\u{e604}'),
    ("e605", '\u{e605}'),
    ("e606", '\u{e606}'),
    ("e607", '\u{e607}'),
    ("e608", '\u{e608}'),
    ("e609", '\u{e609}'),
    ("e60a", '\u{e60a}'),
    ("e60b", '\u{e60b}'),
    ("e60c", '\u{e60c}'),
    ("e60d", '\u{e60d}'),
    ("e60e", '\u{e60e}'),
    ("e60f", '\u{e60f}'),
    ("e610", '\u{e610}'),
    ("e611", '\u{e611}'),
    ("e612", '\u{e612}'),
    ("e613", '\u{e613}'),
    ("e614", '\u{e614}'),
    ("e615", '\u{e615}'),
    ("e616", '\u{e616}'),
    ("e617", '\u{e617}'),
    ("e618", '\u{e618}'),
    ("e619", '\u{e619}'),
    ("e61a", '\u{e61a}'),
    ("e61b", '\u{e61b}'),
    ("e61c", '\u{e61c}'),
    ("e61d", '\u{e61d}'),
    ("e61e", '\u{e61e}'),
    ("e61f", '\u{e61f}'),
    ("e620", '\u{e620}'),
    ("e621", '\u{e621}'),
    ("e622", '\u{e622}'),
    ("e623", '\u{e623}'),
    ("e624", '\u{e624}'),
    ("e625", '\u{e625}'),
    ("e626", '\u{e626}'),
    ("e627", '\u{e627}'),
    ("e628", '\u{e628}'),
    ("e629", '\u{e629}'),
    ("e62a", '\u{e62a}'),
    ("e62b", '\u{e62b}'),
    ("e62c", '\u{e62c}'),
    ("e62d", '\u{e62d}'),
    ("e62e", '\u{e62e}'),
    ("e62f", '\u{e62f}'),
    ("e630", '\u{e630}'),
    ("e631", '\u{e631}'),
    ("e632", '\u{e632}'),
    ("e633", '\u{e633}'),
    ("e634", '\u{e634}'),
    ("e635", '\u{e635}'),
    ("e636", '\u{e636}'),
    ("e637", '\u{e637}'),
    ("e638", '\u{e638}'),
    ("e639", '\u{e639}'),
    ("e63a", '\u{e63a}'),
    ("e63b", '\u{e63b}'),
    ("e63c", '\u{e63c}'),
    ("e63d", '\u{e63d}'),
    ("e63e", '\u{e63e}'),
    ("e63f", '\u{e63f}'),
    ("e640", '\u{e640}'),
    ("e641", '\u{e641}'),
    ("e642", '\u{e642}'),
    ("e643", '\u{e643}'),
    ("e644", '\u{e644}'),
    ("e645", '\u{e645}'),
    ("e646", '\u{e646}'),
    ("e647", '\u{e647}'),
    ("e648", '\u{e648}'),
    ("e649", '\u{e649}'),
    ("e64a", '\u{e64a}'),
    ("e64b", '\u{e64b}'),
    ("e64c", '\u{e64c}'),
    ("e64d", '\u{e64d}'),
    ("e64e", '\u{e64e}'),
    ("e64f", '\u{e64f}'),
    ("e650", '\u{e650}'),
    ("e651", '\u{e651}'),
    ("e652", '\u{e652}'),
    ("e653", '\u{e653}'),
    ("e654", '\u{e654}'),
    ("e655", '\u{e655}'),
    ("e656", '\u{e656}'),
    ("e657", '\u{e657}'),
    ("e658", '\u{e658}'),
    ("e659", '\u{e659}'),
    ("e65a", '\u{e65a}'),
    ("e65b", '\u{e65b}'),
    ("e65c", '\u{e65c}'),
    ("e65d", '\u{e65d}'),
    ("e65e", '\u{e65e}'),
    ("e65f", '\u{e65f}'),
    ("e660", '\u{e660}'),
    ("e661", '\u{e661}'),
    ("e662", '\u{e662}'),
    ("e663", '\u{e663}'),
    ("e664", '\u{e664}'),
    ("e665", '\u{e665}'),
    ("e666", '\u{e666}'),
    ("e667", '\u{e667}'),
    ("e668", '\u{e668}'),
    ("e669", '\u{e669}'),
    ("e66a", '\u{e66a}'),
    ("e66b", '\u{e66b}'),
    ("e66c", '\u{e66c}'),
    ("e66d", '\u{e66d}'),
    ("e66e", '\u{e66e}'),
    ("e66f", '\u{e66f}'),
    ("e670", '\u{e670}'),
    ("e671", '\u{e671}'),
    ("e672", '\u{e672}'),
    ("e673", '\u{e673}'),
    ("e674", '\u{e674}'),
    ("e675", '\u{e675}'),
    ("e676", '\u{e676}'),
    ("e677", '\u{e677}'),
    ("e678", '\u{e678}'),
    ("e679", '\u{e679}'),
    ("e67a", '\u{e67a}'),
    ("e67b", '\u{e67b}'),
    ("e67c", '\u{e67c}'),
    ("e67d", '\u{e67d}'),
    ("e67e", '\u{e67e}'),
    ("e67f", '\u{e67f}'),
    ("e680", '\u{e680}'),
    ("e681", '\u{e681}'),
    ("e682", '\u{e682}'),
    ("e683", '\u{e683}'),
    ("e684", '\u{e684}'),
    ("e685", '\u{e685}'),
    ("e686", '\u{e686}'),
    ("e687", '\u{e687}'),
    ("e688", '\u{e688}'),
    ("e689", '\u{e689}'),
    ("e68a", '\u{e68a}'),
    ("e68b", '\u{e68b}'),
    ("e68c", '\u{e68c}'),
    ("e68d", '\u{e68d}'),
    ("e68e", '\u{e68e}'),
    ("e68f", '\u{e68f}'),
    ("e690", '\u{e690}'),
    ("e691", '\u{e691}'),
    ("e692", '\u{e692}'),
    ("e693", '\u{e693}'),
    ("e694", '\u{e694}'),
    ("e695", '\u{e695}'),
    ("e696", '\u{e696}'),
    ("e697", '\u{e697}'),
    ("e698", '\u{e698}'),
    ("e699", '\u{e699}'),
    ("e69a", '\u{e69a}'),
    ("e69b", '\u{e69b}'),
    ("e69c", '\u{e69c}'),
    ("e69d", '\u{e69d}'),
    ("e69e", '\u{e69e}'),
    ("e69f", '\u{e69f}'),
    ("e6a0", '\u{e6a0}'),
    ("e6a1", '\u{e6a1}'),
    ("e6a2", '\u{e6a2}'),
    ("e6a3", '\u{e6a3}'),
    ("e6a4", '\u{e6a4}'),
    ("e6a5", '\u{e6a5}'),
    ("e6a6", '\u{e6a6}'),
    ("e6a7", '\u{e6a7}'),
    ("e6a8", '\u{e6a8}'),
    ("e6a9", '\u{e6a9}'),
    ("e6aa", '\u{e6aa}'),
    ("e6ab", '\u{e6ab}'),
    ("e6ac", '\u{e6ac}'),
    ("e6ad", '\u{e6ad}'),
    ("e6ae", '\u{e6ae}'),
    ("e6af", '\u{e6af}'),
    ("e6b0", '\u{e6b0}'),
    ("e6b1", '\u{e6b1}'),
    ("e6b2", '\u{e6b2}'),
    ("e6b3", '\u{e6b3}'),
    ("e6b4", '\u{e6b4}'),
    ("e6b5", '\u{e6b5}'),
    ("e6b6", '\u{e6b6}'),
    ("e6b7", '\u{e6b7}'),
    ("e6b8", '\u{e6b8}'),
    ("e6b9", '\u{e6b9}'),
    ("e6ba", '\u{e6ba}'),
    ("e6bb", '\u{e6bb}'),
    ("e6bc", '\u{e6bc}'),
    ("e6bd", '\u{e6bd}'),
    ("e6be", '\u{e6be}'),
    ("e6bf", '\u{e6bf}'),
    ("e6c0", '\u{e6c0}'),
    ("e6c1", '\u{e6c1}'),
    ("e6c2", '\u{e6c2}'),
    ("e6c3", '\u{e6c3}'),
    ("e6c4", '\u{e6c4}'),
    ("e6c5", '\u{e6c5}'),
    ("e6c6", '\u{e6c6}'),
    ("e6c7", '\u{e6c7}'),
    ("e6c8", '\u{e6c8}'),
    ("e6c9", '\u{e6c9}'),
    ("e6ca", '\u{e6ca}'),
    ("e6cb", '\u{e6cb}'),
    ("e6cc", '\u{e6cc}'),
    ("e6cd", '\u{e6cd}'),
    ("e6ce", '\u{e6ce}'),
    ("e6cf", '\u{e6cf}'),
    ("e6d0", '\u{e6d0}'),
    ("e6d1", '\u{e6d1}'),
    ("e6d2", '\u{e6d2}'),
    ("e6d3", '\u{e6d3}'),
    ("e6d4", '\u{e6d4}'),
    ("e6d5", '\u{e6d5}'),
    ("e6d6", '\u{e6d6}'),
    ("e6d7", '\u{e6d7}'),
    ("e6d8", '\u{e6d8}'),
    ("e6d9", '\u{e6d9}'),
    ("e6da", '\u{e6da}'),
    ("e6db", '\u{e6db}'),
    ("e6dc", '\u{e6dc}'),
    ("e6dd", '\u{e6dd}'),
    ("e6de", '\u{e6de}'),
    ("e6df", '\u{e6df}'),
    ("e6e0", '\u{e6e0}'),
    ("e6e1", '\u{e6e1}'),
    ("e6e2", '\u{e6e2}'),
    ("e6e3", '\u{e6e3}'),
    ("e6e4", '\u{e6e4}'),
    ("e6e5", '\u{e6e5}'),
    ("e6e6", '\u{e6e6}'),
    ("e6e7", '\u{e6e7}'),
    ("e6e8", '\u{e6e8}'),
    ("e6e9", '\u{e6e9}'),
    ("e6ea", '\u{e6ea}'),
    ("e6eb", '\u{e6eb}'),
    ("e6ec", '\u{e6ec}'),
    ("e6ed", '\u{e6ed}'),
    ("e6ee", '\u{e6ee}'),
    ("e6ef", '\u{e6ef}'),
    ("e6f0", '\u{e6f0}'),
    ("e6f1", '\u{e6f1}'),
    ("e6f2", '\u{e6f2}'),
    ("e6f3", '\u{e6f3}'),
    ("e6f4", '\u{e6f4}'),
    ("e6f5", '\u{e6f5}'),
    ("e6f6", '\u{e6f6}'),
    ("e6f7", '\u{e6f7}'),
    ("e6f8", '\u{e6f8}'),
    ("e6f9", '\u{e6f9}'),
    ("e6fa", '\u{e6fa}'),
    ("e6fb", '\u{e6fb}'),
    ("e6fc", '\u{e6fc}'),
    ("e6fd", '\u{e6fd}'),
    ("e6fe", '\u{e6fe}'),
    ("e6ff", '\u{e6ff}'),
    ("e700", '\u{e700}'),
    ("e701", '\u{e701}'),
    ("e702", '\u{e702}'),
    ("e703", '\u{e703}'),
    ("e704", '\u{e704}'),
    ("e705", '\u{e705}'),
    ("e706", '\u{e706}'),
    ("e707", '\u{e707}'),
    ("e708", '\u{e708}'),
    ("e709", '\u{e709}'),
    ("e70a", '\u{e70a}'),
    ("e70b", '\u{e70b}'),
    ("e70c", '\u{e70c}'),
    ("e70d", '\u{e70d}'),
    ("e70e", '\u{e70e}'),
    ("e70f", '\u{e70f}'),
    ("e710", '\u{e710}'),
    ("e711", '\u{e711}'),
    ("e712", '\u{e712}'),
    ("e713", '\u{e713}'),
    ("e714", '\u{e714}'),
    ("e715", '\u{e715}'),
    ("e716", '\u{e716}'),
    ("e717", '\u{e717}'),
    ("e718", '\u{e718}'),
    ("e719", '\u{e719}'),
    ("e71a", '\u{e71a}'),
    ("e71b", '\u{e71b}'),
    ("e71c", '\u{e71c}'),
    ("e71d", '\u{e71d}'),
    ("e71e", '\u{e71e}'),
    ("e71f", '\u{e71f}'),
    ("e720", '\u{e720}'),
    ("e721", '\u{e721}'),
    ("e722", '\u{e722}'),
    ("e723", '\u{e723}'),
    ("e724", '\u{e724}'),
    ("e725", '\u{e725}'),
    ("e726", '\u{e726}'),
    ("e727", '\u{e727}'),
    ("e728", '\u{e728}'),
    ("e729", '\u{e729}'),
    ("e72a", '\u{e72a}'),
    ("e72b", '\u{e72b}'),
    ("e72c", '\u{e72c}'),
    ("e72d", '\u{e72d}'),
    ("e72e", '\u{e72e}'),
    ("e72f", '\u{e72f}'),
    ("e730", '\u{e730}'),
    ("e731", '\u{e731}'),
    ("e732", '\u{e732}'),
    ("e733", '\u{e733}'),
    ("e734", '\u{e734}'),
    ("e735", '\u{e735}'),
    ("e736", '\u{e736}'),
    ("e737", '\u{e737}'),
    ("e738", '\u{e738}'),
    ("e739", '\u{e739}'),
    ("e73a", '\u{e73a}'),
    ("e73b", '\u{e73b}'),
    ("e73c", '\u{e73c}'),
    ("e73d", '\u{e73d}'),
    ("e73e", '\u{e73e}'),
    ("e73f", '\u{e73f}'),
    ("e740", '\u{e740}'),
    ("e741", '\u{e741}'),
    ("e742", '\u{e742}'),
    ("e743", '\u{e743}'),
    ("e744", '\u{e744}'),
    ("e745", '\u{e745}'),
    ("e746", '\u{e746}'),
    ("e747", '\u{e747}'),
    ("e748", '\u{e748}'),
    ("e749", '\u{e749}'),
    ("e74a", '\u{e74a}'),
    ("e74b", '\u{e74b}'),
    ("e74c", '\u{e74c}'),
    ("e74d", '\u{e74d}'),
    ("e74e", '\u{e74e}'),
    ("e74f", '\u{e74f}'),
    ("e750", '\u{e750}'),
    ("e751", '\u{e751}'),
    ("e752", '\u{e752}'),
    ("e753", '\u{e753}'),
    ("e754", '\u{e754}'),
    ("e755", '\u{e755}'),
    ("e756", '\u{e756}'),
    ("e757", '\u{e757}'),
    ("e758", '\u{e758}'),
    ("e759", '\u{e759}'),
    ("e75a", '\u{e75a}'),
    ("e75b", '\u{e75b}'),
    ("e75c", '\u{e75c}'),
    ("e75d", '\u{e75d}'),
    ("e75e", '\u{e75e}'),
    ("e75f", '\u{e75f}'),
    ("e760", '\u{e760}'),
    ("e761", '\u{e761}'),
    ("e762", '\u{e762}'),
    ("e763", '\u{e763}'),
    ("e764", '\u{e764}'),
    ("e765", '\u{e765}'),
    ("e766", '\u{e766}'),
    ("e767", '\u{e767}'),
    ("e768", '\u{e768}'),
    ("e769", '\u{e769}'),
    ("e76a", '\u{e76a}'),
    ("e76b", '\u{e76b}'),
    ("e76c", '\u{e76c}'),
    ("e76d", '\u{e76d}'),
    ("e76e", '\u{e76e}'),
    ("e76f", '\u{e76f}'),
    ("e770", '\u{e770}'),
    ("e771", '\u{e771}'),
    ("e772", '\u{e772}'),
    ("e773", '\u{e773}'),
    ("e774", '\u{e774}'),
    ("e775", '\u{e775}'),
    ("e776", '\u{e776}'),
    ("e777", '\u{e777}'),
    ("e778", '\u{e778}'),
    ("e779", '\u{e779}'),
    ("e77a", '\u{e77a}'),
    ("e77b", '\u{e77b}'),
    ("e77c", '\u{e77c}'),
    ("e77d", '\u{e77d}'),
    ("e77e", '\u{e77e}'),
    ("e77f", '\u{e77f}'),
    ("e780", '\u{e780}'),
    ("e781", '\u{e781}'),
    ("e782", '\u{e782}'),
    ("e783", '\u{e783}'),
    ("e784", '\u{e784}'),
    ("e785", '\u{e785}'),
    ("e786", '\u{e786}'),
    ("e787", '\u{e787}'),
    ("e788", '\u{e788}'),
    ("e789", '\u{e789}'),
    ("e78a", '\u{e78a}'),
    ("e78b", '\u{e78b}'),
    ("e78c", '\u{e78c}'),
    ("e78d", '\u{e78d}'),
    ("e78e", '\u{e78e}'),
    ("e78f", '\u{e78f}'),
    ("e790", '\u{e790}'),
    ("e791", '\u{e791}'),
    ("e792", '\u{e792}'),
    ("e793", '\u{e793}'),
    ("e794", '\u{e794}'),
    ("e795", '\u{e795}'),
    ("e796", '\u{e796}'),
    ("e797", '\u{e797}'),
    ("e798", '\u{e798}'),
    ("e799", '\u{e799}'),
    ("e79a", '\u{e79a}'),
    ("e79b", '\u{e79b}'),
    ("e79c", '\u{e79c}'),
    ("e79d", '\u{e79d}'),
    ("e79e", '\u{e79e}'),
    ("e79f", '\u{e79f}'),
    ("e7a0", '\u{e7a0}'),
    ("e7a1", '\u{e7a1}'),
    ("e7a2", '\u{e7a2}'),
    ("e7a3", '\u{e7a3}'),
    ("e7a4", '\u{e7a4}'),
    ("e7a5", '\u{e7a5}'),
    ("e7a6", '\u{e7a6}'),
    ("e7a7", '\u{e7a7}'),
    ("e7a8", '\u{e7a8}'),
    ("e7a9", '\u{e7a9}'),
    ("e7aa", '\u{e7aa}'),
    ("e7ab", '\u{e7ab}'),
    ("e7ac", '\u{e7ac}'),
    ("e7ad", '\u{e7ad}'),
    ("e7ae", '\u{e7ae}'),
    ("e7af", '\u{e7af}'),
    ("e7b0", '\u{e7b0}'),
    ("e7b1", '\u{e7b1}'),
    ("e7b2", '\u{e7b2}'),
    ("e7b3", '\u{e7b3}'),
    ("e7b4", '\u{e7b4}'),
    ("e7b5", '\u{e7b5}'),
    ("e7b6", '\u{e7b6}'),
    ("e7b7", '\u{e7b7}'),
    ("e7b8", '\u{e7b8}'),
    ("e7b9", '\u{e7b9}'),
    ("e7ba", '\u{e7ba}'),
    ("e7bb", '\u{e7bb}'),
    ("e7bc", '\u{e7bc}'),
    ("e7bd", '\u{e7bd}'),
    ("e7be", '\u{e7be}'),
    ("e7bf", '\u{e7bf}'),
    ("e7c0", '\u{e7c0}'),
    ("e7c1", '\u{e7c1}'),
    ("e7c2", '\u{e7c2}'),
    ("e7c3", '\u{e7c3}'),
    ("e7c4", '\u{e7c4}'),
    ("e7c5", '\u{e7c5}'),
    ("e7c6", '\u{e7c6}'),
    ("e7c7", '\u{e7c7}'),
    ("e7c8", '\u{e7c8}'),
    ("e7c9", '\u{e7c9}'),
    ("e7ca", '\u{e7ca}'),
    ("e7cb", '\u{e7cb}'),
    ("e7cc", '\u{e7cc}'),
    ("e7cd", '\u{e7cd}'),
    ("e7ce", '\u{e7ce}'),
    ("e7cf", '\u{e7cf}'),
    ("e7d0", '\u{e7d0}'),
    ("e7d1", '\u{e7d1}'),
    ("e7d2", '\u{e7d2}'),
    ("e7d3", '\u{e7d3}'),
    ("e7d4", '\u{e7d4}'),
    ("e7d5", '\u{e7d5}'),
    ("e7d6", '\u{e7d6}'),
    ("e7d7", '\u{e7d7}'),
    ("e7d8", '\u{e7d8}'),
    ("e7d9", '\u{e7d9}'),
    ("e7da", '\u{e7da}'),
    ("e7db", '\u{e7db}'),
    ("e7dc", '\u{e7dc}'),
    ("e7dd", '\u{e7dd}'),
    ("e7de", '\u{e7de}'),
    ("e7df", '\u{e7df}'),
    ("e7e0", '\u{e7e0}'),
    ("e7e1", '\u{e7e1}'),
    ("e7e2", '\u{e7e2}'),
    ("e7e3", '\u{e7e3}'),
    ("e7e4", '\u{e7e4}'),
    ("e7e5", '\u{e7e5}'),
    ("e7e6", '\u{e7e6}'),
    ("e7e7", '\u{e7e7}'),
    ("e7e8", '\u{e7e8}'),
    ("e7e9", '\u{e7e9}'),
    ("e7ea", '\u{e7ea}'),
    ("e7eb", '\u{e7eb}'),
    ("e7ec", '\u{e7ec}'),
    ("e7ed", '\u{e7ed}'),
    ("e7ee", '\u{e7ee}'),
    ("e7ef", '\u{e7ef}'),
    ("e7f0", '\u{e7f0}'),
    ("e7f1", '\u{e7f1}'),
    ("e7f2", '\u{e7f2}'),
    ("e7f3", '\u{e7f3}'),
    ("e7f4", '\u{e7f4}'),
    ("e7f5", '\u{e7f5}'),
    ("e7f6", '\u{e7f6}'),
    ("e7f7", '\u{e7f7}'),
    ("e7f8", '\u{e7f8}'),
    ("e7f9", '\u{e7f9}'),
    ("e7fa", '\u{e7fa}'),
    ("e7fb", '\u{e7fb}'),
    ("e7fc", '\u{e7fc}'),
    ("e7fd", '\u{e7fd}'),
    ("e7fe", '\u{e7fe}'),
    ("e7ff", '\u{e7ff}'),
    ("e800", '\u{e800}'),
    ("e801", '\u{e801}'),
    ("e802", '\u{e802}'),
    ("e803", '\u{e803}'),
    ("e804", '\u{e804}'),
    ("e805", '\u{e805}'),
    ("e806", '\u{e806}'),
    ("e807", '\u{e807}'),
    ("e808", '\u{e808}'),
    ("e809", '\u{e809}'),
    ("e80a", '\u{e80a}'),
    ("e80b", '\u{e80b}'),
    ("e80c", '\u{e80c}'),
    ("e80d", '\u{e80d}'),
    ("e80e", '\u{e80e}'),
    ("e80f", '\u{e80f}'),
    ("e810", '\u{e810}'),
    ("e811", '\u{e811}'),
    ("e812", '\u{e812}'),
    ("e813", '\u{e813}'),
    ("e814", '\u{e814}'),
    ("e815", '\u{e815}'),
    ("e816", '\u{e816}'),
    ("e817", '\u{e817}'),
    ("e818", '\u{e818}'),
    ("e819", '\u{e819}'),
    ("e81a", '\u{e81a}'),
    ("e81b", '\u{e81b}'),
    ("e81c", '\u{e81c}'),
    ("e81d", '\u{e81d}'),
    ("e81e", '\u{e81e}'),
    ("e81f", '\u{e81f}'),
    ("e820", '\u{e820}'),
    ("e821", '\u{e821}'),
    ("e822", '\u{e822}'),
    ("e823", '\u{e823}'),
    ("e824", '\u{e824}'),
    ("e825", '\u{e825}'),
    ("e826", '\u{e826}'),
    ("e827", '\u{e827}'),
    ("e828", '\u{e828}'),
    ("e829", '\u{e829}'),
    ("e82a", '\u{e82a}'),
    ("e82b", '\u{e82b}'),
    ("e82c", '\u{e82c}'),
    ("e82d", '\u{e82d}'),
    ("e82e", '\u{e82e}'),
    ("e82f", '\u{e82f}'),
    ("e830", '\u{e830}'),
    ("e831", '\u{e831}'),
    ("e832", '\u{e832}'),
    ("e833", '\u{e833}'),
    ("e834", '\u{e834}'),
    ("e835", '\u{e835}'),
    ("e836", '\u{e836}'),
    ("e837", '\u{e837}'),
    ("e838", '\u{e838}'),
    ("e839", '\u{e839}'),
    ("e83a", '\u{e83a}'),
    ("e83b", '\u{e83b}'),
    ("e83c", '\u{e83c}'),
    ("e83d", '\u{e83d}'),
    ("e83e", '\u{e83e}'),
    ("e83f", '\u{e83f}'),
    ("e840", '\u{e840}'),
    ("e841", '\u{e841}'),
    ("e842", '\u{e842}'),
    ("e843", '\u{e843}'),
    ("e844", '\u{e844}'),
    ("e845", '\u{e845}'),
    ("e846", '\u{e846}'),
    ("e847", '\u{e847}'),
    ("e848", '\u{e848}'),
    ("e849", '\u{e849}'),
    ("e84a", '\u{e84a}'),
    ("e84b", '\u{e84b}'),
    ("e84c", '\u{e84c}'),
    ("e84d", '\u{e84d}'),
    ("e84e", '\u{e84e}'),
    ("e84f", '\u{e84f}'),
    ("e850", '\u{e850}'),
    ("e851", '\u{e851}'),
    ("e852", '\u{e852}'),
    ("e853", '\u{e853}'),
    ("e854", '\u{e854}'),
    ("e855", '\u{e855}'),
    ("e856", '\u{e856}'),
    ("e857", '\u{e857}'),
    ("e858", '\u{e858}'),
    ("e859", '\u{e859}'),
    ("e85a", '\u{e85a}'),
    ("e85b", '\u{e85b}'),
    ("e85c", '\u{e85c}'),
    ("e85d", '\u{e85d}'),
    ("e85e", '\u{e85e}'),
    ("e85f", '\u{e85f}'),
    ("e860", '\u{e860}'),
    ("e861", '\u{e861}'),
    ("e862", '\u{e862}'),
    ("e863", '\u{e863}'),
    ("e864", '\u{e864}'),
    ("e865", '\u{e865}'),
    ("e866", '\u{e866}'),
    ("e867", '\u{e867}'),
    ("e868", '\u{e868}'),
    ("e869", '\u{e869}'),
    ("e86a", '\u{e86a}'),
    ("e86b", '\u{e86b}'),
    ("e86c", '\u{e86c}'),
    ("e86d", '\u{e86d}'),
    ("e86e", '\u{e86e}'),
    ("e86f", '\u{e86f}'),
    ("e870", '\u{e870}'),
    ("e871", '\u{e871}'),
    ("e872", '\u{e872}'),
    ("e873", '\u{e873}'),
    ("e874", '\u{e874}'),
    ("e875", '\u{e875}'),
    ("e876", '\u{e876}'),
    ("e877", '\u{e877}'),
    ("e878", '\u{e878}'),
    ("e879", '\u{e879}'),
    ("e87a", '\u{e87a}'),
    ("e87b", '\u{e87b}'),
    ("e87c", '\u{e87c}'),
    ("e87d", '\u{e87d}'),
    ("e87e", '\u{e87e}'),
    ("e87f", '\u{e87f}'),
    ("e880", '\u{e880}'),
    ("e881", '\u{e881}'),
    ("e882", '\u{e882}'),
    ("e883", '\u{e883}'),
    ("e884", '\u{e884}'),
    ("e885", '\u{e885}'),
    ("e886", '\u{e886}'),
    ("e887", '\u{e887}'),
    ("e888", '\u{e888}'),
    ("e889", '\u{e889}'),
    ("e88a", '\u{e88a}'),
    ("e88b", '\u{e88b}'),
    ("e88c", '\u{e88c}'),
    ("e88d", '\u{e88d}'),
    ("e88e", '\u{e88e}'),
    ("e88f", '\u{e88f}'),
    ("e890", '\u{e890}'),
    ("e891", '\u{e891}'),
    ("e892", '\u{e892}'),
    ("e893", '\u{e893}'),
    ("e894", '\u{e894}'),
    ("e895", '\u{e895}'),
    ("e896", '\u{e896}'),
    ("e897", '\u{e897}'),
    ("e898", '\u{e898}'),
    ("e899", '\u{e899}'),
    ("e89a", '\u{e89a}'),
    ("e89b", '\u{e89b}'),
    ("e89c", '\u{e89c}'),
    ("e89d", '\u{e89d}'),
    ("e89e", '\u{e89e}'),
    ("e89f", '\u{e89f}'),
    ("e8a0", '\u{e8a0}'),
    ("e8a1", '\u{e8a1}'),
    ("e8a2", '\u{e8a2}'),
    ("e8a3", '\u{e8a3}'),
    ("e8a4", '\u{e8a4}'),
    ("e8a5", '\u{e8a5}'),
    ("e8a6", '\u{e8a6}'),
    ("e8a7", '\u{e8a7}'),
    ("e8a8", '\u{e8a8}'),
    ("e8a9", '\u{e8a9}'),
    ("e8aa", '\u{e8aa}'),
    ("e8ab", '\u{e8ab}'),
    ("e8ac", '\u{e8ac}'),
    ("e8ad", '\u{e8ad}'),
    ("e8ae", '\u{e8ae}'),
    ("e8af", '\u{e8af}'),
    ("e8b0", '\u{e8b0}'),
    ("e8b1", '\u{e8b1}'),
    ("e8b2", '\u{e8b2}'),
    ("e8b3", '\u{e8b3}'),
    ("e8b4", '\u{e8b4}'),
    ("e8b5", '\u{e8b5}'),
    ("e8b6", '\u{e8b6}'),
    ("e8b7", '\u{e8b7}'),
    ("e8b8", '\u{e8b8}'),
    ("e8b9", '\u{e8b9}'),
    ("e8ba", '\u{e8ba}'),
    ("e8bb", '\u{e8bb}'),
    ("e8bc", '\u{e8bc}'),
    ("e8bd", '\u{e8bd}'),
    ("e8be", '\u{e8be}'),
    ("e8bf", '\u{e8bf}'),
    ("e8c0", '\u{e8c0}'),
    ("e8c1", '\u{e8c1}'),
    ("e8c2", '\u{e8c2}'),
    ("e8c3", '\u{e8c3}'),
    ("e8c4", '\u{e8c4}'),
    ("e8c5", '\u{e8c5}'),
    ("e8c6", '\u{e8c6}'),
    ("e8c7", '\u{e8c7}'),
    ("e8c8", '\u{e8c8}'),
    ("e8c9", '\u{e8c9}'),
    ("e8ca", '\u{e8ca}'),
    ("e8cb", '\u{e8cb}'),
    ("e8cc", '\u{e8cc}'),
    ("e8cd", '\u{e8cd}'),
    ("e8ce", '\u{e8ce}'),
    ("e8cf", '\u{e8cf}'),
    ("e8d0", '\u{e8d0}'),
    ("e8d1", '\u{e8d1}'),
    ("e8d2", '\u{e8d2}'),
    ("e8d3", '\u{e8d3}'),
    ("e8d4", '\u{e8d4}'),
    ("e8d5", '\u{e8d5}'),
    ("e8d6", '\u{e8d6}'),
    ("e8d7", '\u{e8d7}'),
    ("e8d8", '\u{e8d8}'),
    ("e8d9", '\u{e8d9}'),
    ("e8da", '\u{e8da}'),
    ("e8db", '\u{e8db}'),
    ("e8dc", '\u{e8dc}'),
    ("e8dd", '\u{e8dd}'),
    ("e8de", '\u{e8de}'),
    ("e8df", '\u{e8df}'),
    ("e8e0", '\u{e8e0}'),
    ("e8e1", '\u{e8e1}'),
    ("e8e2", '\u{e8e2}'),
    ("e8e3", '\u{e8e3}'),
    ("e8e4", '\u{e8e4}'),
    ("e8e5", '\u{e8e5}'),
    ("e8e6", '\u{e8e6}'),
    ("e8e7", '\u{e8e7}'),
    ("e8e8", '\u{e8e8}'),
    ("e8e9", '\u{e8e9}'),
    ("e8ea", '\u{e8ea}'),
    ("e8eb", '\u{e8eb}'),
    ("e8ec", '\u{e8ec}'),
    ("e8ed", '\u{e8ed}'),
    ("e8ee", '\u{e8ee}'),
    ("e8ef", '\u{e8ef}'),
    ("e8f0", '\u{e8f0}'),
    ("e8f1", '\u{e8f1}'),
    ("e8f2", '\u{e8f2}'),
    ("e8f3", '\u{e8f3}'),
    ("e8f4", '\u{e8f4}'),
    ("e8f5", '\u{e8f5}'),
    ("e8f6", '\u{e8f6}'),
    ("e8f7", '\u{e8f7}'),
    ("e8f8", '\u{e8f8}'),
    ("e8f9", '\u{e8f9}'),
    ("e8fa", '\u{e8fa}'),
    ("e8fb", '\u{e8fb}'),
    ("e8fc", '\u{e8fc}'),
    ("e8fd", '\u{e8fd}'),
    ("e8fe", '\u{e8fe}'),
    ("e8ff", '\u{e8ff}'),
];

