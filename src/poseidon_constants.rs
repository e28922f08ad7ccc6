//! Poseidon parameters over the BN254 scalar field, circomlib flavour.
//!
//! Round constants and MDS matrices come from the Grain LFSR procedure of the
//! Poseidon reference generator (field = 1, S-box = x^5, n = 254, R_F = 8) and
//! match `poseidon_constants.json` shipped with circomlib. Values are
//! big-endian field elements.

/// Decodes 64 lowercase hex digits into a big-endian field element.
const fn fe(hex: &str) -> [u8; 32] {
    let digits = hex.as_bytes();
    assert!(digits.len() == 64, "field element must be 64 hex digits");
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = (nibble(digits[2 * i]) << 4) | nibble(digits[2 * i + 1]);
        i += 1;
    }
    out
}

const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => panic!("invalid hex digit"),
    }
}

/// BN254 scalar field modulus.
pub const FIELD_MODULUS: [u8; 32] = fe("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

pub const FULL_ROUNDS: usize = 8;

pub const PARTIAL_ROUNDS_T3: usize = 57;

pub const PARTIAL_ROUNDS_T4: usize = 56;

pub const PARTIAL_ROUNDS_T6: usize = 60;

pub const ROUND_CONSTANTS_T3: [[u8; 32]; 195] = [
    fe("0ee9a592ba9a9518d05986d656f40c2114c4993c11bb29938d21d47304cd8e6e"),
    fe("00f1445235f2148c5986587169fc1bcd887b08d4d00868df5696fff40956e864"),
    fe("08dff3487e8ac99e1f29a058d0fa80b930c728730b7ab36ce879f3890ecf73f5"),
    fe("2f27be690fdaee46c3ce28f7532b13c856c35342c84bda6e20966310fadc01d0"),
    fe("2b2ae1acf68b7b8d2416bebf3d4f6234b763fe04b8043ee48b8327bebca16cf2"),
    fe("0319d062072bef7ecca5eac06f97d4d55952c175ab6b03eae64b44c7dbf11cfa"),
    fe("28813dcaebaeaa828a376df87af4a63bc8b7bf27ad49c6298ef7b387bf28526d"),
    fe("2727673b2ccbc903f181bf38e1c1d40d2033865200c352bc150928adddf9cb78"),
    fe("234ec45ca27727c2e74abd2b2a1494cd6efbd43e340587d6b8fb9e31e65cc632"),
    fe("15b52534031ae18f7f862cb2cf7cf760ab10a8150a337b1ccd99ff6e8797d428"),
    fe("0dc8fad6d9e4b35f5ed9a3d186b79ce38e0e8a8d1b58b132d701d4eecf68d1f6"),
    fe("1bcd95ffc211fbca600f705fad3fb567ea4eb378f62e1fec97805518a47e4d9c"),
    fe("10520b0ab721cadfe9eff81b016fc34dc76da36c2578937817cb978d069de559"),
    fe("1f6d48149b8e7f7d9b257d8ed5fbbaf42932498075fed0ace88a9eb81f5627f6"),
    fe("1d9655f652309014d29e00ef35a2089bfff8dc1c816f0dc9ca34bdb5460c8705"),
    fe("04df5a56ff95bcafb051f7b1cd43a99ba731ff67e47032058fe3d4185697cc7d"),
    fe("0672d995f8fff640151b3d290cedaf148690a10a8c8424a7f6ec282b6e4be828"),
    fe("099952b414884454b21200d7ffafdd5f0c9a9dcc06f2708e9fc1d8209b5c75b9"),
    fe("052cba2255dfd00c7c483143ba8d469448e43586a9b4cd9183fd0e843a6b9fa6"),
    fe("0b8badee690adb8eb0bd74712b7999af82de55707251ad7716077cb93c464ddc"),
    fe("119b1590f13307af5a1ee651020c07c749c15d60683a8050b963d0a8e4b2bdd1"),
    fe("03150b7cd6d5d17b2529d36be0f67b832c4acfc884ef4ee5ce15be0bfb4a8d09"),
    fe("2cc6182c5e14546e3cf1951f173912355374efb83d80898abe69cb317c9ea565"),
    fe("005032551e6378c450cfe129a404b3764218cadedac14e2b92d2cd73111bf0f9"),
    fe("233237e3289baa34bb147e972ebcb9516469c399fcc069fb88f9da2cc28276b5"),
    fe("05c8f4f4ebd4a6e3c980d31674bfbe6323037f21b34ae5a4e80c2d4c24d60280"),
    fe("0a7b1db13042d396ba05d818a319f25252bcf35ef3aeed91ee1f09b2590fc65b"),
    fe("2a73b71f9b210cf5b14296572c9d32dbf156e2b086ff47dc5df542365a404ec0"),
    fe("1ac9b0417abcc9a1935107e9ffc91dc3ec18f2c4dbe7f22976a760bb5c50c460"),
    fe("12c0339ae08374823fabb076707ef479269f3e4d6cb104349015ee046dc93fc0"),
    fe("0b7475b102a165ad7f5b18db4e1e704f52900aa3253baac68246682e56e9a28e"),
    fe("037c2849e191ca3edb1c5e49f6e8b8917c843e379366f2ea32ab3aa88d7f8448"),
    fe("05a6811f8556f014e92674661e217e9bd5206c5c93a07dc145fdb176a716346f"),
    fe("29a795e7d98028946e947b75d54e9f044076e87a7b2883b47b675ef5f38bd66e"),
    fe("20439a0c84b322eb45a3857afc18f5826e8c7382c8a1585c507be199981fd22f"),
    fe("2e0ba8d94d9ecf4a94ec2050c7371ff1bb50f27799a84b6d4a2a6f2a0982c887"),
    fe("143fd115ce08fb27ca38eb7cce822b4517822cd2109048d2e6d0ddcca17d71c8"),
    fe("0c64cbecb1c734b857968dbbdcf813cdf8611659323dbcbfc84323623be9caf1"),
    fe("028a305847c683f646fca925c163ff5ae74f348d62c2b670f1426cef9403da53"),
    fe("2e4ef510ff0b6fda5fa940ab4c4380f26a6bcb64d89427b824d6755b5db9e30c"),
    fe("0081c95bc43384e663d79270c956ce3b8925b4f6d033b078b96384f50579400e"),
    fe("2ed5f0c91cbd9749187e2fade687e05ee2491b349c039a0bba8a9f4023a0bb38"),
    fe("30509991f88da3504bbf374ed5aae2f03448a22c76234c8c990f01f33a735206"),
    fe("1c3f20fd55409a53221b7c4d49a356b9f0a1119fb2067b41a7529094424ec6ad"),
    fe("10b4e7f3ab5df003049514459b6e18eec46bb2213e8e131e170887b47ddcb96c"),
    fe("2a1982979c3ff7f43ddd543d891c2abddd80f804c077d775039aa3502e43adef"),
    fe("1c74ee64f15e1db6feddbead56d6d55dba431ebc396c9af95cad0f1315bd5c91"),
    fe("07533ec850ba7f98eab9303cace01b4b9e4f2e8b82708cfa9c2fe45a0ae146a0"),
    fe("21576b438e500449a151e4eeaf17b154285c68f42d42c1808a11abf3764c0750"),
    fe("2f17c0559b8fe79608ad5ca193d62f10bce8384c815f0906743d6930836d4a9e"),
    fe("2d477e3862d07708a79e8aae946170bc9775a4201318474ae665b0b1b7e2730e"),
    fe("162f5243967064c390e095577984f291afba2266c38f5abcd89be0f5b2747eab"),
    fe("2b4cb233ede9ba48264ecd2c8ae50d1ad7a8596a87f29f8a7777a70092393311"),
    fe("2c8fbcb2dd8573dc1dbaf8f4622854776db2eece6d85c4cf4254e7c35e03b07a"),
    fe("1d6f347725e4816af2ff453f0cd56b199e1b61e9f601e9ade5e88db870949da9"),
    fe("204b0c397f4ebe71ebc2d8b3df5b913df9e6ac02b68d31324cd49af5c4565529"),
    fe("0c4cb9dc3c4fd8174f1149b3c63c3c2f9ecb827cd7dc25534ff8fb75bc79c502"),
    fe("174ad61a1448c899a25416474f4930301e5c49475279e0639a616ddc45bc7b54"),
    fe("1a96177bcf4d8d89f759df4ec2f3cde2eaaa28c177cc0fa13a9816d49a38d2ef"),
    fe("066d04b24331d71cd0ef8054bc60c4ff05202c126a233c1a8242ace360b8a30a"),
    fe("2a4c4fc6ec0b0cf52195782871c6dd3b381cc65f72e02ad527037a62aa1bd804"),
    fe("13ab2d136ccf37d447e9f2e14a7cedc95e727f8446f6d9d7e55afc01219fd649"),
    fe("1121552fca26061619d24d843dc82769c1b04fcec26f55194c2e3e869acc6a9a"),
    fe("00ef653322b13d6c889bc81715c37d77a6cd267d595c4a8909a5546c7c97cff1"),
    fe("0e25483e45a665208b261d8ba74051e6400c776d652595d9845aca35d8a397d3"),
    fe("29f536dcb9dd7682245264659e15d88e395ac3d4dde92d8c46448db979eeba89"),
    fe("2a56ef9f2c53febadfda33575dbdbd885a124e2780bbea170e456baace0fa5be"),
    fe("1c8361c78eb5cf5decfb7a2d17b5c409f2ae2999a46762e8ee416240a8cb9af1"),
    fe("151aff5f38b20a0fc0473089aaf0206b83e8e68a764507bfd3d0ab4be74319c5"),
    fe("04c6187e41ed881dc1b239c88f7f9d43a9f52fc8c8b6cdd1e76e47615b51f100"),
    fe("13b37bd80f4d27fb10d84331f6fb6d534b81c61ed15776449e801b7ddc9c2967"),
    fe("01a5c536273c2d9df578bfbd32c17b7a2ce3664c2a52032c9321ceb1c4e8a8e4"),
    fe("2ab3561834ca73835ad05f5d7acb950b4a9a2c666b9726da832239065b7c3b02"),
    fe("1d4d8ec291e720db200fe6d686c0d613acaf6af4e95d3bf69f7ed516a597b646"),
    fe("041294d2cc484d228f5784fe7919fd2bb925351240a04b711514c9c80b65af1d"),
    fe("154ac98e01708c611c4fa715991f004898f57939d126e392042971dd90e81fc6"),
    fe("0b339d8acca7d4f83eedd84093aef51050b3684c88f8b0b04524563bc6ea4da4"),
    fe("0955e49e6610c94254a4f84cfbab344598f0e71eaff4a7dd81ed95b50839c82e"),
    fe("06746a6156eba54426b9e22206f15abca9a6f41e6f535c6f3525401ea0654626"),
    fe("0f18f5a0ecd1423c496f3820c549c27838e5790e2bd0a196ac917c7ff32077fb"),
    fe("04f6eeca1751f7308ac59eff5beb261e4bb563583ede7bc92a738223d6f76e13"),
    fe("2b56973364c4c4f5c1a3ec4da3cdce038811eb116fb3e45bc1768d26fc0b3758"),
    fe("123769dd49d5b054dcd76b89804b1bcb8e1392b385716a5d83feb65d437f29ef"),
    fe("2147b424fc48c80a88ee52b91169aacea989f6446471150994257b2fb01c63e9"),
    fe("0fdc1f58548b85701a6c5505ea332a29647e6f34ad4243c2ea54ad897cebe54d"),
    fe("12373a8251fea004df68abcf0f7786d4bceff28c5dbbe0c3944f685cc0a0b1f2"),
    fe("21e4f4ea5f35f85bad7ea52ff742c9e8a642756b6af44203dd8a1f35c1a90035"),
    fe("16243916d69d2ca3dfb4722224d4c462b57366492f45e90d8a81934f1bc3b147"),
    fe("1efbe46dd7a578b4f66f9adbc88b4378abc21566e1a0453ca13a4159cac04ac2"),
    fe("07ea5e8537cf5dd08886020e23a7f387d468d5525be66f853b672cc96a88969a"),
    fe("05a8c4f9968b8aa3b7b478a30f9a5b63650f19a75e7ce11ca9fe16c0b76c00bc"),
    fe("20f057712cc21654fbfe59bd345e8dac3f7818c701b9c7882d9d57b72a32e83f"),
    fe("04a12ededa9dfd689672f8c67fee31636dcd8e88d01d49019bd90b33eb33db69"),
    fe("27e88d8c15f37dcee44f1e5425a51decbd136ce5091a6767e49ec9544ccd101a"),
    fe("2feed17b84285ed9b8a5c8c5e95a41f66e096619a7703223176c41ee433de4d1"),
    fe("1ed7cc76edf45c7c404241420f729cf394e5942911312a0d6972b8bd53aff2b8"),
    fe("15742e99b9bfa323157ff8c586f5660eac6783476144cdcadf2874be45466b1a"),
    fe("1aac285387f65e82c895fc6887ddf40577107454c6ec0317284f033f27d0c785"),
    fe("25851c3c845d4790f9ddadbdb6057357832e2e7a49775f71ec75a96554d67c77"),
    fe("15a5821565cc2ec2ce78457db197edf353b7ebba2c5523370ddccc3d9f146a67"),
    fe("2411d57a4813b9980efa7e31a1db5966dcf64f36044277502f15485f28c71727"),
    fe("002e6f8d6520cd4713e335b8c0b6d2e647e9a98e12f4cd2558828b5ef6cb4c9b"),
    fe("2ff7bc8f4380cde997da00b616b0fcd1af8f0e91e2fe1ed7398834609e0315d2"),
    fe("00b9831b948525595ee02724471bcd182e9521f6b7bb68f1e93be4febb0d3cbe"),
    fe("0a2f53768b8ebf6a86913b0e57c04e011ca408648a4743a87d77adbf0c9c3512"),
    fe("00248156142fd0373a479f91ff239e960f599ff7e94be69b7f2a290305e1198d"),
    fe("171d5620b87bfb1328cf8c02ab3f0c9a397196aa6a542c2350eb512a2b2bcda9"),
    fe("170a4f55536f7dc970087c7c10d6fad760c952172dd54dd99d1045e4ec34a808"),
    fe("29aba33f799fe66c2ef3134aea04336ecc37e38c1cd211ba482eca17e2dbfae1"),
    fe("1e9bc179a4fdd758fdd1bb1945088d47e70d114a03f6a0e8b5ba650369e64973"),
    fe("1dd269799b660fad58f7f4892dfb0b5afeaad869a9c4b44f9c9e1c43bdaf8f09"),
    fe("22cdbc8b70117ad1401181d02e15459e7ccd426fe869c7c95d1dd2cb0f24af38"),
    fe("0ef042e454771c533a9f57a55c503fcefd3150f52ed94a7cd5ba93b9c7dacefd"),
    fe("11609e06ad6c8fe2f287f3036037e8851318e8b08a0359a03b304ffca62e8284"),
    fe("1166d9e554616dba9e753eea427c17b7fecd58c076dfe42708b08f5b783aa9af"),
    fe("2de52989431a859593413026354413db177fbf4cd2ac0b56f855a888357ee466"),
    fe("3006eb4ffc7a85819a6da492f3a8ac1df51aee5b17b8e89d74bf01cf5f71e9ad"),
    fe("2af41fbb61ba8a80fdcf6fff9e3f6f422993fe8f0a4639f962344c8225145086"),
    fe("119e684de476155fe5a6b41a8ebc85db8718ab27889e85e781b214bace4827c3"),
    fe("1835b786e2e8925e188bea59ae363537b51248c23828f047cff784b97b3fd800"),
    fe("28201a34c594dfa34d794996c6433a20d152bac2a7905c926c40e285ab32eeb6"),
    fe("083efd7a27d1751094e80fefaf78b000864c82eb571187724a761f88c22cc4e7"),
    fe("0b6f88a3577199526158e61ceea27be811c16df7774dd8519e079564f61fd13b"),
    fe("0ec868e6d15e51d9644f66e1d6471a94589511ca00d29e1014390e6ee4254f5b"),
    fe("2af33e3f866771271ac0c9b3ed2e1142ecd3e74b939cd40d00d937ab84c98591"),
    fe("0b520211f904b5e7d09b5d961c6ace7734568c547dd6858b364ce5e47951f178"),
    fe("0b2d722d0919a1aad8db58f10062a92ea0c56ac4270e822cca228620188a1d40"),
    fe("1f790d4d7f8cf094d980ceb37c2453e957b54a9991ca38bbe0061d1ed6e562d4"),
    fe("0171eb95dfbf7d1eaea97cd385f780150885c16235a2a6a8da92ceb01e504233"),
    fe("0c2d0e3b5fd57549329bf6885da66b9b790b40defd2c8650762305381b168873"),
    fe("1162fb28689c27154e5a8228b4e72b377cbcafa589e283c35d3803054407a18d"),
    fe("2f1459b65dee441b64ad386a91e8310f282c5a92a89e19921623ef8249711bc0"),
    fe("1e6ff3216b688c3d996d74367d5cd4c1bc489d46754eb712c243f70d1b53cfbb"),
    fe("01ca8be73832b8d0681487d27d157802d741a6f36cdc2a0576881f9326478875"),
    fe("1f7735706ffe9fc586f976d5bdf223dc680286080b10cea00b9b5de315f9650e"),
    fe("2522b60f4ea3307640a0c2dce041fba921ac10a3d5f096ef4745ca838285f019"),
    fe("23f0bee001b1029d5255075ddc957f833418cad4f52b6c3f8ce16c235572575b"),
    fe("2bc1ae8b8ddbb81fcaac2d44555ed5685d142633e9df905f66d9401093082d59"),
    fe("0f9406b8296564a37304507b8dba3ed162371273a07b1fc98011fcd6ad72205f"),
    fe("2360a8eb0cc7defa67b72998de90714e17e75b174a52ee4acb126c8cd995f0a8"),
    fe("15871a5cddead976804c803cbaef255eb4815a5e96df8b006dcbbc2767f88948"),
    fe("193a56766998ee9e0a8652dd2f3b1da0362f4f54f72379544f957ccdeefb420f"),
    fe("2a394a43934f86982f9be56ff4fab1703b2e63c8ad334834e4309805e777ae0f"),
    fe("1859954cfeb8695f3e8b635dcb345192892cd11223443ba7b4166e8876c0d142"),
    fe("04e1181763050e58013444dbcb99f1902b11bc25d90bbdca408d3819f4fed32b"),
    fe("0fdb253dee83869d40c335ea64de8c5bb10eb82db08b5e8b1f5e5552bfd05f23"),
    fe("058cbe8a9a5027bdaa4efb623adead6275f08686f1c08984a9d7c5bae9b4f1c0"),
    fe("1382edce9971e186497eadb1aeb1f52b23b4b83bef023ab0d15228b4cceca59a"),
    fe("03464990f045c6ee0819ca51fd11b0be7f61b8eb99f14b77e1e6634601d9e8b5"),
    fe("23f7bfc8720dc296fff33b41f98ff83c6fcab4605db2eb5aaa5bc137aeb70a58"),
    fe("0a59a158e3eec2117e6e94e7f0e9decf18c3ffd5e1531a9219636158bbaf62f2"),
    fe("06ec54c80381c052b58bf23b312ffd3ce2c4eba065420af8f4c23ed0075fd07b"),
    fe("118872dc832e0eb5476b56648e867ec8b09340f7a7bcb1b4962f0ff9ed1f9d01"),
    fe("13d69fa127d834165ad5c7cba7ad59ed52e0b0f0e42d7fea95e1906b520921b1"),
    fe("169a177f63ea681270b1c6877a73d21bde143942fb71dc55fd8a49f19f10c77b"),
    fe("04ef51591c6ead97ef42f287adce40d93abeb032b922f66ffb7e9a5a7450544d"),
    fe("256e175a1dc079390ecd7ca703fb2e3b19ec61805d4f03ced5f45ee6dd0f69ec"),
    fe("30102d28636abd5fe5f2af412ff6004f75cc360d3205dd2da002813d3e2ceeb2"),
    fe("10998e42dfcd3bbf1c0714bc73eb1bf40443a3fa99bef4a31fd31be182fcc792"),
    fe("193edd8e9fcf3d7625fa7d24b598a1d89f3362eaf4d582efecad76f879e36860"),
    fe("18168afd34f2d915d0368ce80b7b3347d1c7a561ce611425f2664d7aa51f0b5d"),
    fe("29383c01ebd3b6ab0c017656ebe658b6a328ec77bc33626e29e2e95b33ea6111"),
    fe("10646d2f2603de39a1f4ae5e7771a64a702db6e86fb76ab600bf573f9010c711"),
    fe("0beb5e07d1b27145f575f1395a55bf132f90c25b40da7b3864d0242dcb1117fb"),
    fe("16d685252078c133dc0d3ecad62b5c8830f95bb2e54b59abdffbf018d96fa336"),
    fe("0a6abd1d833938f33c74154e0404b4b40a555bbbec21ddfafd672dd62047f01a"),
    fe("1a679f5d36eb7b5c8ea12a4c2dedc8feb12dffeec450317270a6f19b34cf1860"),
    fe("0980fb233bd456c23974d50e0ebfde4726a423eada4e8f6ffbc7592e3f1b93d6"),
    fe("161b42232e61b84cbf1810af93a38fc0cece3d5628c9282003ebacb5c312c72b"),
    fe("0ada10a90c7f0520950f7d47a60d5e6a493f09787f1564e5d09203db47de1a0b"),
    fe("1a730d372310ba82320345a29ac4238ed3f07a8a2b4e121bb50ddb9af407f451"),
    fe("2c8120f268ef054f817064c369dda7ea908377feaba5c4dffbda10ef58e8c556"),
    fe("1c7c8824f758753fa57c00789c684217b930e95313bcb73e6e7b8649a4968f70"),
    fe("2cd9ed31f5f8691c8e39e4077a74faa0f400ad8b491eb3f7b47b27fa3fd1cf77"),
    fe("23ff4f9d46813457cf60d92f57618399a5e022ac321ca550854ae23918a22eea"),
    fe("09945a5d147a4f66ceece6405dddd9d0af5a2c5103529407dff1ea58f180426d"),
    fe("188d9c528025d4c2b67660c6b771b90f7c7da6eaa29d3f268a6dd223ec6fc630"),
    fe("3050e37996596b7f81f68311431d8734dba7d926d3633595e0c0d8ddf4f0f47f"),
    fe("15af1169396830a91600ca8102c35c426ceae5461e3f95d89d829518d30afd78"),
    fe("1da6d09885432ea9a06d9f37f873d985dae933e351466b2904284da3320d8acc"),
    fe("2796ea90d269af29f5f8acf33921124e4e4fad3dbe658945e546ee411ddaa9cb"),
    fe("202d7dd1da0f6b4b0325c8b3307742f01e15612ec8e9304a7cb0319e01d32d60"),
    fe("096d6790d05bb759156a952ba263d672a2d7f9c788f4c831a29dace4c0f8be5f"),
    fe("054efa1f65b0fce283808965275d877b438da23ce5b13e1963798cb1447d25a4"),
    fe("1b162f83d917e93edb3308c29802deb9d8aa690113b2e14864ccf6e18e4165f1"),
    fe("21e5241e12564dd6fd9f1cdd2a0de39eedfefc1466cc568ec5ceb745a0506edc"),
    fe("1cfb5662e8cf5ac9226a80ee17b36abecb73ab5f87e161927b4349e10e4bdf08"),
    fe("0f21177e302a771bbae6d8d1ecb373b62c99af346220ac0129c53f666eb24100"),
    fe("1671522374606992affb0dd7f71b12bec4236aede6290546bcef7e1f515c2320"),
    fe("0fa3ec5b9488259c2eb4cf24501bfad9be2ec9e42c5cc8ccd419d2a692cad870"),
    fe("193c0e04e0bd298357cb266c1506080ed36edce85c648cc085e8c57b1ab54bba"),
    fe("102adf8ef74735a27e9128306dcbc3c99f6f7291cd406578ce14ea2adaba68f8"),
    fe("0fe0af7858e49859e2a54d6f1ad945b1316aa24bfbdd23ae40a6d0cb70c3eab1"),
    fe("216f6717bbc7dedb08536a2220843f4e2da5f1daa9ebdefde8a5ea7344798d22"),
    fe("1da55cc900f0d21f4a3e694391918a1b3c23b2ac773c6b3ef88e2e4228325161"),
];

/// Row-major 3x3 MDS matrix.
pub const MDS_T3: [[u8; 32]; 9] = [
    fe("109b7f411ba0e4c9b2b70caf5c36a7b194be7c11ad24378bfedb68592ba8118b"),
    fe("16ed41e13bb9c0c66ae119424fddbcbc9314dc9fdbdeea55d6c64543dc4903e0"),
    fe("2b90bba00fca0589f617e7dcbfe82e0df706ab640ceb247b791a93b74e36736d"),
    fe("2969f27eed31a480b9c36c764379dbca2cc8fdd1415c3dded62940bcde0bd771"),
    fe("2e2419f9ec02ec394c9871c832963dc1b89d743c8c7b964029b2311687b1fe23"),
    fe("101071f0032379b697315876690f053d148d4e109f5fb065c8aacc55a0f89bfa"),
    fe("143021ec686a3f330d5f9e654638065ce6cd79e28c5b3753326244ee65a1b1a7"),
    fe("176cc029695ad02582a70eff08a6fd99d057e12e58e7d7b6b16cdfabc8ee2911"),
    fe("19a3fc0a56702bf417ba7fee3802593fa644470307043f7773279cd71d25d5e0"),
];

pub const ROUND_CONSTANTS_T4: [[u8; 32]; 256] = [
    fe("19b849f69450b06848da1d39bd5e4a4302bb86744edc26238b0878e269ed23e5"),
    fe("265ddfe127dd51bd7239347b758f0a1320eb2cc7450acc1dad47f80c8dcf34d6"),
    fe("199750ec472f1809e0f66a545e1e51624108ac845015c2aa3dfc36bab497d8aa"),
    fe("157ff3fe65ac7208110f06a5f74302b14d743ea25067f0ffd032f787c7f1cdf8"),
    fe("2e49c43c4569dd9c5fd35ac45fca33f10b15c590692f8beefe18f4896ac94902"),
    fe("0e35fb89981890520d4aef2b6d6506c3cb2f0b6973c24fa82731345ffa2d1f1e"),
    fe("251ad47cb15c4f1105f109ae5e944f1ba9d9e7806d667ffec6fe723002e0b996"),
    fe("13da07dc64d428369873e97160234641f8beb56fdd05e5f3563fa39d9c22df4e"),
    fe("0c009b84e650e6d23dc00c7dccef7483a553939689d350cd46e7b89055fd4738"),
    fe("011f16b1c63a854f01992e3956f42d8b04eb650c6d535eb0203dec74befdca06"),
    fe("0ed69e5e383a688f209d9a561daa79612f3f78d0467ad45485df07093f367549"),
    fe("04dba94a7b0ce9e221acad41472b6bbe3aec507f5eb3d33f463672264c9f789b"),
    fe("0a3f2637d840f3a16eb094271c9d237b6036757d4bb50bf7ce732ff1d4fa28e8"),
    fe("259a666f129eea198f8a1c502fdb38fa39b1f075569564b6e54a485d1182323f"),
    fe("28bf7459c9b2f4c6d8e7d06a4ee3a47f7745d4271038e5157a32fdf7ede0d6a1"),
    fe("0a1ca941f057037526ea200f489be8d4c37c85bbcce6a2aeec91bd6941432447"),
    fe("0c6f8f958be0e93053d7fd4fc54512855535ed1539f051dcb43a26fd926361cf"),
    fe("123106a93cd17578d426e8128ac9d90aa9e8a00708e296e084dd57e69caaf811"),
    fe("26e1ba52ad9285d97dd3ab52f8e840085e8fa83ff1e8f1877b074867cd2dee75"),
    fe("1cb55cad7bd133de18a64c5c47b9c97cbe4d8b7bf9e095864471537e6a4ae2c5"),
    fe("1dcd73e46acd8f8e0e2c7ce04bde7f6d2a53043d5060a41c7143f08e6e9055d0"),
    fe("011003e32f6d9c66f5852f05474a4def0cda294a0eb4e9b9b12b9bb4512e5574"),
    fe("2b1e809ac1d10ab29ad5f20d03a57dfebadfe5903f58bafed7c508dd2287ae8c"),
    fe("2539de1785b735999fb4dac35ee17ed0ef995d05ab2fc5faeaa69ae87bcec0a5"),
    fe("0c246c5a2ef8ee0126497f222b3e0a0ef4e1c3d41c86d46e43982cb11d77951d"),
    fe("192089c4974f68e95408148f7c0632edbb09e6a6ad1a1c2f3f0305f5d03b527b"),
    fe("1eae0ad8ab68b2f06a0ee36eeb0d0c058529097d91096b756d8fdc2fb5a60d85"),
    fe("179190e5d0e22179e46f8282872abc88db6e2fdc0dee99e69768bd98c5d06bfb"),
    fe("29bb9e2c9076732576e9a81c7ac4b83214528f7db00f31bf6cafe794a9b3cd1c"),
    fe("225d394e42207599403efd0c2464a90d52652645882aac35b10e590e6e691e08"),
    fe("064760623c25c8cf753d238055b444532be13557451c087de09efd454b23fd59"),
    fe("10ba3a0e01df92e87f301c4b716d8a394d67f4bf42a75c10922910a78f6b5b87"),
    fe("0e070bf53f8451b24f9c6e96b0c2a801cb511bc0c242eb9d361b77693f21471c"),
    fe("1b94cd61b051b04dd39755ff93821a73ccd6cb11d2491d8aa7f921014de252fb"),
    fe("1d7cb39bafb8c744e148787a2e70230f9d4e917d5713bb050487b5aa7d74070b"),
    fe("2ec93189bd1ab4f69117d0fe980c80ff8785c2961829f701bb74ac1f303b17db"),
    fe("2db366bfdd36d277a692bb825b86275beac404a19ae07a9082ea46bd83517926"),
    fe("062100eb485db06269655cf186a68532985275428450359adc99cec6960711b8"),
    fe("0761d33c66614aaa570e7f1e8244ca1120243f92fa59e4f900c567bf41f5a59b"),
    fe("20fc411a114d13992c2705aa034e3f315d78608a0f7de4ccf7a72e494855ad0d"),
    fe("25b5c004a4bdfcb5add9ec4e9ab219ba102c67e8b3effb5fc3a30f317250bc5a"),
    fe("23b1822d278ed632a494e58f6df6f5ed038b186d8474155ad87e7dff62b37f4b"),
    fe("22734b4c5c3f9493606c4ba9012499bf0f14d13bfcfcccaa16102a29cc2f69e0"),
    fe("26c0c8fe09eb30b7e27a74dc33492347e5bdff409aa3610254413d3fad795ce5"),
    fe("070dd0ccb6bd7bbae88eac03fa1fbb26196be3083a809829bbd626df348ccad9"),
    fe("12b6595bdb329b6fb043ba78bb28c3bec2c0a6de46d8c5ad6067c4ebfd4250da"),
    fe("248d97d7f76283d63bec30e7a5876c11c06fca9b275c671c5e33d95bb7e8d729"),
    fe("1a306d439d463b0816fc6fd64cc939318b45eb759ddde4aa106d15d9bd9baaaa"),
    fe("28a8f8372e3c38daced7c00421cb4621f4f1b54ddc27821b0d62d3d6ec7c56cf"),
    fe("0094975717f9a8a8bb35152f24d43294071ce320c829f388bc852183e1e2ce7e"),
    fe("04d5ee4c3aa78f7d80fde60d716480d3593f74d4f653ae83f4103246db2e8d65"),
    fe("2a6cf5e9aa03d4336349ad6fb8ed2269c7bef54b8822cc76d08495c12efde187"),
    fe("2304d31eaab960ba9274da43e19ddeb7f792180808fd6e43baae48d7efcba3f3"),
    fe("03fd9ac865a4b2a6d5e7009785817249bff08a7e0726fcb4e1c11d39d199f0b0"),
    fe("00b7258ded52bbda2248404d55ee5044798afc3a209193073f7954d4d63b0b64"),
    fe("159f81ada0771799ec38fca2d4bf65ebb13d3a74f3298db36272c5ca65e92d9a"),
    fe("1ef90e67437fbc8550237a75bc28e3bb9000130ea25f0c5471e144cf4264431f"),
    fe("1e65f838515e5ff0196b49aa41a2d2568df739bc176b08ec95a79ed82932e30d"),
    fe("2b1b045def3a166cec6ce768d079ba74b18c844e570e1f826575c1068c94c33f"),
    fe("0832e5753ceb0ff6402543b1109229c165dc2d73bef715e3f1c6e07c168bb173"),
    fe("02f614e9cedfb3dc6b762ae0a37d41bab1b841c2e8b6451bc5a8e3c390b6ad16"),
    fe("0e2427d38bd46a60dd640b8e362cad967370ebb777bedff40f6a0be27e7ed705"),
    fe("0493630b7c670b6deb7c84d414e7ce79049f0ec098c3c7c50768bbe29214a53a"),
    fe("22ead100e8e482674decdab17066c5a26bb1515355d5461a3dc06cc85327cea9"),
    fe("25b3e56e655b42cdaae2626ed2554d48583f1ae35626d04de5084e0b6d2a6f16"),
    fe("1e32752ada8836ef5837a6cde8ff13dbb599c336349e4c584b4fdc0a0cf6f9d0"),
    fe("2fa2a871c15a387cc50f68f6f3c3455b23c00995f05078f672a9864074d412e5"),
    fe("2f569b8a9a4424c9278e1db7311e889f54ccbf10661bab7fcd18e7c7a7d83505"),
    fe("044cb455110a8fdd531ade530234c518a7df93f7332ffd2144165374b246b43d"),
    fe("227808de93906d5d420246157f2e42b191fe8c90adfe118178ddc723a5319025"),
    fe("02fcca2934e046bc623adead873579865d03781ae090ad4a8579d2e7a6800355"),
    fe("0ef915f0ac120b876abccceb344a1d36bad3f3c5ab91a8ddcbec2e060d8befac"),
    fe("1797130f4b7a3e1777eb757bc6f287f6ab0fb85f6be63b09f3b16ef2b1405d38"),
    fe("0a76225dc04170ae3306c85abab59e608c7f497c20156d4d36c668555decc6e5"),
    fe("1fffb9ec1992d66ba1e77a7b93209af6f8fa76d48acb664796174b5326a31a5c"),
    fe("25721c4fc15a3f2853b57c338fa538d85f8fbba6c6b9c6090611889b797b9c5f"),
    fe("0c817fd42d5f7a41215e3d07ba197216adb4c3790705da95eb63b982bfcaf75a"),
    fe("13abe3f5239915d39f7e13c2c24970b6df8cf86ce00a22002bc15866e52b5a96"),
    fe("2106feea546224ea12ef7f39987a46c85c1bc3dc29bdbd7a92cd60acb4d391ce"),
    fe("21ca859468a746b6aaa79474a37dab49f1ca5a28c748bc7157e1b3345bb0f959"),
    fe("05ccd6255c1e6f0c5cf1f0df934194c62911d14d0321662a8f1a48999e34185b"),
    fe("0f0e34a64b70a626e464d846674c4c8816c4fb267fe44fe6ea28678cb09490a4"),
    fe("0558531a4e25470c6157794ca36d0e9647dbfcfe350d64838f5b1a8a2de0d4bf"),
    fe("09d3dca9173ed2faceea125157683d18924cadad3f655a60b72f5864961f1455"),
    fe("0328cbd54e8c0913493f866ed03d218bf23f92d68aaec48617d4c722e5bd4335"),
    fe("2bf07216e2aff0a223a487b1a7094e07e79e7bcc9798c648ee3347dd5329d34b"),
    fe("1daf345a58006b736499c583cb76c316d6f78ed6a6dffc82111e11a63fe412df"),
    fe("176563472456aaa746b694c60e1823611ef39039b2edc7ff391e6f2293d2c404"),
    fe("2ef1e0fad9f08e87a3bb5e47d7e33538ca964d2b7d1083d4fb0225035bd3f8db"),
    fe("226c9b1af95babcf17b2b1f57c7310179c1803dec5ae8f0a1779ed36c817ae2a"),
    fe("14bce3549cc3db7428126b4c3a15ae0ff8148c89f13fb35d35734eb5d4ad0def"),
    fe("2debff156e276bb5742c3373f2635b48b8e923d301f372f8e550cfd4034212c7"),
    fe("2d4083cf5a87f5b6fc2395b22e356b6441afe1b6b29c47add7d0432d1d4760c7"),
    fe("0c225b7bcd04bf9c34b911262fdc9c1b91bf79a10c0184d89c317c53d7161c29"),
    fe("03152169d4f3d06ec33a79bfac91a02c99aa0200db66d5aa7b835265f9c9c8f3"),
    fe("0b61811a9210be78b05974587486d58bddc8f51bfdfebbb87afe8b7aa7d3199c"),
    fe("203e000cad298daaf7eba6a5c5921878b8ae48acf7048f16046d637a533b6f78"),
    fe("1a44bf0937c722d1376672b69f6c9655ba7ee386fda1112c0757143d1bfa9146"),
    fe("0376b4fae08cb03d3500afec1a1f56acb8e0fde75a2106d7002f59c5611d4daa"),
    fe("00780af2ca1cad6465a2171250fdfc32d6fc241d3214177f3d553ef363182185"),
    fe("10774d9ab80c25bdeb808bedfd72a8d9b75dbe18d5221c87e9d857079bdc31d5"),
    fe("10dc6e9c006ea38b04b1e03b4bd9490c0d03f98929ca1d7fb56821fd19d3b6e8"),
    fe("00544b8338791518b2c7645a50392798b21f75bb60e3596170067d00141cac16"),
    fe("222c01175718386f2e2e82eb122789e352e105a3b8fa852613bc534433ee428c"),
    fe("2840d045e9bc22b259cfb8811b1e0f45b77f7bdb7f7e2b46151a1430f608e3c5"),
    fe("062752f86eebe11a009c937e468c335b04554574c2990196508e01fa5860186b"),
    fe("06041bdac48205ac87adb87c20a478a71c9950c12a80bc0a55a8e83eaaf04746"),
    fe("04a533f236c422d1ff900a368949b0022c7a2ae092f308d82b1dcbbf51f5000d"),
    fe("13e31d7a67232fd811d6a955b3d4f25dfe066d1e7dc33df04bde50a2b2d05b2a"),
    fe("011c2683ae91eb4dfbc13d6357e8599a9279d1648ff2c95d2f79905bb13920f1"),
    fe("0b0d219346b8574525b1a270e0b4cba5d56c928e3e2c2bd0a1ecaed015aaf6ae"),
    fe("14abdec8db9c6dc970291ee638690209b65080781ef9fd13d84c7a726b5f1364"),
    fe("1a0b70b4b26fdc28fcd32aa3d266478801eb12202ef47ced988d0376610be106"),
    fe("278543721f96d1307b6943f9804e7fe56401deb2ef99c4d12704882e7278b607"),
    fe("16eb59494a9776cf57866214dbd1473f3f0738a325638d8ba36535e011d58259"),
    fe("2567a658a81ffb444f240088fa5524c69a9e53eeab6b7f8c41c3479dcf8c644a"),
    fe("29aa1d7c151e9ad0a7ab39f1abd9cf77ab78e0215a5715a6b882ade840bb13d8"),
    fe("15c091233e60efe0d4bbfce2b36415006a4f017f9a85388ce206b91f99f2c984"),
    fe("16bd7d22ff858e5e0882c2c999558d77e7673ad5f1915f9feb679a8115f014cf"),
    fe("02db50480a07be0eb2c2e13ed6ef4074c0182d9b668b8e08ffe6769250042025"),
    fe("05e4a220e6a3bc9f7b6806ec9d6cdba186330ef2bf7adb4c13ba866343b73119"),
    fe("1dda05ebc30170bc98cbf2a5ee3b50e8b5f70bc424d39fa4104d37f1cbcf7a42"),
    fe("0184bef721888187f645b6fee3667f3c91da214414d89ba5cd301f22b0de8990"),
    fe("1498a307e68900065f5e8276f62aef1c37414b84494e1577ad1a6d64341b78ec"),
    fe("25f40f82b31dacc4f4939800b9d2c3eacef737b8fab1f864fe33548ad46bd49d"),
    fe("09d317cc670251943f6f5862a30d2ea9e83056ce4907bfbbcb1ff31ce5bb9650"),
    fe("2f77d77786d979b23ba4ce4a4c1b3bd0a41132cd467a86ab29b913b6cf3149d0"),
    fe("0f53dafd535a9f4473dc266b6fccc6841bbd336963f254c152f89e785f729bbf"),
    fe("25c1fd72e223045265c3a099e17526fa0e6976e1c00baf16de96de85deef2fa2"),
    fe("2a902c8980c17faae368d385d52d16be41af95c84eaea3cf893e65d6ce4a8f62"),
    fe("1ce1580a3452ecf302878c8976b82be96676dd114d1dc8d25527405762f83529"),
    fe("24a6073f91addc33a49a1fa306df008801c5ec569609034d2fc50f7f0f4d0056"),
    fe("25e52dbd6124530d9fc27fe306d71d4583e07ca554b5d1577f256c68b0be2b74"),
    fe("23dffae3c423fa7a93468dbccfb029855974be4d0a7b29946796e5b6cd70f15d"),
    fe("06342da370cc0d8c49b77594f6b027c480615d50be36243a99591bc9924ed6f5"),
    fe("2754114281286546b75f09f115fc751b4778303d0405c1b4cc7df0d8e9f63925"),
    fe("15c19e8534c5c1a8862c2bc1d119eddeabf214153833d7bdb59ee197f8187cf5"),
    fe("265fe062766d08fab4c78d0d9ef3cabe366f3be0a821061679b4b3d2d77d5f3e"),
    fe("13ccf689d67a3ec9f22cb7cd0ac3a327d377ac5cd0146f048debfd098d3ec7be"),
    fe("17662f7456789739f81cd3974827a887d92a5e05bdf3fe6b9fbccca4524aaebd"),
    fe("21b29c76329b31c8ef18631e515f7f2f82ca6a5cca70cee4e809fd624be7ad5d"),
    fe("18137478382aadba441eb97fe27901989c06738165215319939eb17b01fa975c"),
    fe("2bc07ea2bfad68e8dc724f5fef2b37c2d34f761935ffd3b739ceec4668f37e88"),
    fe("2ddb2e376f54d64a563840480df993feb4173203c2bd94ad0e602077aef9a03e"),
    fe("277eb50f2baa706106b41cb24c602609e8a20f8d72f613708adb25373596c3f7"),
    fe("0d4de47e1aba34269d0c620904f01a56b33fc4b450c0db50bb7f87734c9a1fe5"),
    fe("0b8442bfe9e4a1b4428673b6bd3eea6f9f445697058f134aae908d0279a29f0c"),
    fe("11fe5b18fbbea1a86e06930cb89f7d4a26e186a65945e96574247fddb720f8f5"),
    fe("224026f6dfaf71e24d25d8f6d9f90021df5b774dcad4d883170e4ad89c33a0d6"),
    fe("0b2ca6a999fe6887e0704dad58d03465a96bc9e37d1091f61bc9f9c62bbeb824"),
    fe("221b63d66f0b45f9d40c54053a28a06b1d0a4ce41d364797a1a7e0c96529f421"),
    fe("30185c48b7b2f1d53d4120801b047d087493bce64d4d24aedce2f4836bb84ad4"),
    fe("23f5d372a3f0e3cba989e223056227d3533356f0faa48f27f8267318632a61f0"),
    fe("2716683b32c755fd1bf8235ea162b1f388e1e0090d06162e8e6dfbe4328f3e3b"),
    fe("0977545836866fa204ca1d853ec0909e3d140770c80ac67dc930c69748d5d4bc"),
    fe("1444e8f592bdbfd8025d91ab4982dd425f51682d31472b05e81c43c0f9434b31"),
    fe("26e04b65e9ca8270beb74a1c5cb8fee8be3ffbfe583f7012a00f874e7718fbe3"),
    fe("22a5c2fa860d11fe34ee47a5cd9f869800f48f4febe29ad6df69816fb1a914d2"),
    fe("174b54d9907d8f5c6afd672a738f42737ec338f3a0964c629f7474dd44c5c8d7"),
    fe("1db1db8aa45283f31168fa66694cf2808d2189b87c8c8143d56c871907b39b87"),
    fe("1530bf0f46527e889030b8c7b7dfde126f65faf8cce0ab66387341d813d1bfd1"),
    fe("0b73f613993229f59f01c1cec8760e9936ead9edc8f2814889330a2f2bade457"),
    fe("29c25a22fe2164604552aaea377f448d587ab977fc8227787bd2dc0f36bcf41e"),
    fe("2b30d53ed1759bfb8503da66c92cf4077abe82795dc272b377df57d77c875526"),
    fe("12f6d703b5702aab7b7b7e69359d53a2756c08c85ede7227cf5f0a2916787cd2"),
    fe("2520e18300afda3f61a40a0b8837293a55ad01071028d4841ffa9ac706364113"),
    fe("1ec9daea860971ecdda8ed4f346fa967ac9bc59278277393c68f09fa03b8b95f"),
    fe("0a99b3e178db2e2e432f5cd5bef8fe4483bf5cbf70ed407c08aae24b830ad725"),
    fe("07cda9e63db6e39f086b89b601c2bbe407ee0abac3c817a1317abad7c5778492"),
    fe("08c9c65a4f955e8952d571b191bb0adb49bd8290963203b35d48aab38f8fc3a3"),
    fe("2737f8ce1d5a67b349590ddbfbd709ed9af54a2a3f2719d33801c9c17bdd9c9e"),
    fe("1049a6c65ff019f0d28770072798e8b7909432bd0c129813a9f179ba627f7d6a"),
    fe("18b4fe968732c462c0ea5a9beb27cecbde8868944fdf64ee60a5122361daeddb"),
    fe("2ff2b6fd22df49d2440b2eaeeefa8c02a6f478cfcf11f1b2a4f7473483885d19"),
    fe("2ec5f2f1928fe932e56c789b8f6bbcb3e8be4057cbd8dbd18a1b352f5cef42ff"),
    fe("265a5eccd8b92975e33ad9f75bf3426d424a4c6a7794ee3f08c1d100378e545e"),
    fe("2405eaa4c0bde1129d6242bb5ada0e68778e656cfcb366bf20517da1dfd4279c"),
    fe("094c97d8c194c42e88018004cbbf2bc5fdb51955d8b2d66b76dd98a2dbf60417"),
    fe("2c30d5f33bb32c5c22b9979a605bf64d508b705221e6a686330c9625c2afe0b8"),
    fe("01a75666f6241f6825d01cc6dcb1622d4886ea583e87299e6aa2fc716fdb6cf5"),
    fe("0a3290e8398113ea4d12ac091e87be7c6d359ab9a66979fcf47bf2e87d382fcb"),
    fe("154ade9ca36e268dfeb38461425bb0d8c31219d8fa0dfc75ecd21bf69aa0cc74"),
    fe("27aa8d3e25380c0b1b172d79c6f22eee99231ef5dc69d8dc13a4b5095d028772"),
    fe("2cf4051e6cab48301a8b2e3bca6099d756bbdf485afa1f549d395bbcbd806461"),
    fe("301e70f729f3c94b1d3f517ddff9f2015131feab8afa5eebb0843d7f84b23e71"),
    fe("298beb64f812d25d8b4d9620347ab02332dc4cef113ae60d17a8d7a4c91f83bc"),
    fe("1b362e72a5f847f84d03fd291c3c471ed1c14a15b221680acf11a3f02e46aa95"),
    fe("0dc8a2146110c0b375432902999223d5aa1ef6e78e1e5ebcbc1d9ba41dc1c737"),
    fe("0a48663b34ce5e1c05dc93092cb69778cb21729a72ddc03a08afa1eb922ff279"),
    fe("0a87391fb1cd8cdf6096b64a82f9e95f0fe46f143b702d74545bb314881098ee"),
    fe("1b5b2946f7c28975f0512ff8e6ca362f8826edd7ea9c29f382ba8a2a0892fd5d"),
    fe("01001cf512ac241d47ebe2239219bc6a173a8bbcb8a5b987b4eac1f533315b6b"),
    fe("2fd977c70f645db4f704fa7d7693da727ac093d3fb5f5febc72beb17d8358a32"),
    fe("23c0039a3fab4ad3c2d7cc688164f39e761d5355c05444d99be763a97793a9c4"),
    fe("19d43ee0c6081c052c9c0df6161eaac1aec356cf435888e79f27f22ff03fa25d"),
    fe("2d9b10c2f2e7ac1afddccffd94a563028bf29b646d020830919f9d5ca1cefe59"),
    fe("2457ca6c2f2aa30ec47e4aff5a66f5ce2799283e166fc81cdae2f2b9f83e4267"),
    fe("0abc392fe85eda855820592445094022811ee8676ed6f0c3044dfb54a7c10b35"),
    fe("19d2cc5ca549d1d40cebcd37f3ea54f31161ac3993acf3101d2c2bc30eac1eb0"),
    fe("0f97ae3033ffa01608aafb26ae13cd393ee0e4ec041ba644a3d3ab546e98c9c8"),
    fe("16dbc78fd28b7fb8260e404cf1d427a7fa15537ea4e168e88a166496e88cfeca"),
    fe("240faf28f11499b916f085f73bc4f22eef8344e576f8ad3d1827820366d5e07b"),
    fe("0a1bb075aa37ff0cfe6c8531e55e1770eaba808c8fdb6dbf46f8cab58d9ef1af"),
    fe("2e47e15ea4a47ff1a6a853aaf3a644ca38d5b085ac1042fdc4a705a7ce089f4d"),
    fe("166e5bf073378348860ca4a9c09d39e1673ab059935f4df35fb14528375772b6"),
    fe("18b42d7ffdd2ea4faf235902f057a2740cacccd027233001ed10f96538f0916f"),
    fe("089cb1b032238f5e4914788e3e3c7ead4fc368020b3ed38221deab1051c37702"),
    fe("242acd3eb3a2f72baf7c7076dd165adf89f9339c7b971921d9e70863451dd8d1"),
    fe("174fbb104a4ee302bf47f2bd82fce896eac9a068283f326474af860457245c3b"),
    fe("17340e71d96f466d61f3058ce092c67d2891fb2bb318613f780c275fe1116c6b"),
    fe("1e8e40ac853b7d42f00f2e383982d024f098b9f8fd455953a2fd380c4df7f6b2"),
    fe("0529898dc0649907e1d4d5e284b8d1075198c55cad66e8a9bf40f92938e2e961"),
    fe("2162754db0baa030bf7de5bb797364dce8c77aa017ee1d7bf65f21c4d4e5df8f"),
    fe("12c7553698c4bf6f3ceb250ae00c58c2a9f9291efbde4c8421bef44741752ec6"),
    fe("292643e3ba2026affcb8c5279313bd51a733c93353e9d9c79cb723136526508e"),
    fe("00ccf13e0cb6f9d81d52951bea990bd5b6c07c5d98e66ff71db6e74d5b87d158"),
    fe("185d1e20e23b0917dd654128cf2f3aaab6723873cb30fc22b0f86c15ab645b4b"),
    fe("14c61c836d55d3df742bdf11c60efa186778e3de0f024c0f13fe53f8d8764e1f"),
    fe("0f356841b3f556fce5dbe4680457691c2919e2af53008184d03ee1195d72449e"),
    fe("1b8fd9ff39714e075df124f887bf40b383143374fd2080ba0c0a6b6e8fa5b3e8"),
    fe("0e86a8c2009c140ca3f873924e2aaa14fc3c8ae04e9df0b3e9103418796f6024"),
    fe("2e6c5e898f5547770e5462ad932fcdd2373fc43820ca2b16b0861421e79155c8"),
    fe("05d797f1ab3647237c14f9d1df032bc9ff9fe1a0ecd377972ce5fd5a0c014604"),
    fe("29a3110463a5aae76c3d152875981d0c1daf2dcd65519ef5ca8929851da8c008"),
    fe("2974da7bc074322273c3a4b91c05354cdc71640a8bbd1f864b732f8163883314"),
    fe("1ed0fb06699ba249b2a30621c05eb12ca29cb91aa082c8bfcce9c522889b47dc"),
    fe("1c793ef0dcc51123654ff26d8d863feeae29e8c572eca912d80c8ae36e40fe9b"),
    fe("1e6aac1c6d3dd3157956257d3d234ef18c91e82589a78169fbb4a8770977dc2f"),
    fe("1a20ada7576234eee6273dd6fa98b25ed037748080a47d948fcda33256fb6bf5"),
    fe("191033d6d85ceaa6fc7a9a23a6fd9996642d772045ece51335d49306728af96c"),
    fe("006e5979da7e7ef53a825aa6fddc3abfc76f200b3740b8b232ef481f5d06297b"),
    fe("0b0d7e69c651910bbef3e68d417e9fa0fbd57f596c8f29831eff8c0174cdb06d"),
    fe("25caf5b0c1b93bc516435ec084e2ecd44ac46dbbb033c5112c4b20a25c9cdf9d"),
    fe("12c1ea892cc31e0d9af8b796d9645872f7f77442d62fd4c8085b2f150f72472a"),
    fe("16af29695157aba9b8bbe3afeb245feee5a929d9f928b9b81de6dadc78c32aae"),
    fe("0136df457c80588dd687fb2f3be18691705b87ec5a4cfdc168d31084256b67dc"),
    fe("1639a28c5b4c81166aea984fba6e71479e07b1efbc74434db95a285060e7b089"),
    fe("03d62fbf82fd1d4313f8e650f587ec06816c28b700bdc50f7e232bd9b5ca9b76"),
    fe("11aeeb527dc8ce44b4d14aaddca3cfe2f77a1e40fc6da97c249830de1edfde54"),
    fe("13f9b9a41274129479c5e6138c6c8ee36a670e6bc68c7a49642b645807bfc824"),
    fe("0e4772fa3d75179dc8484cd26c7c1f635ddeeed7a939440c506cae8b7ebcd15b"),
    fe("1b39a00cbc81e427de4bdec58febe8d8b5971752067a612b39fc46a68c5d4db4"),
    fe("2bedb66e1ad5a1d571e16e2953f48731f66463c2eb54a245444d1c0a3a25707e"),
    fe("2cf0a09a55ca93af8abd068f06a7287fb08b193b608582a27379ce35da915dec"),
    fe("2d1bd78fa90e77aa88830cabfef2f8d27d1a512050ba7db0753c8fb863efb387"),
    fe("065610c6f4f92491f423d3071eb83539f7c0d49c1387062e630d7fd283dc3394"),
    fe("2d933ff19217a5545013b12873452bebcc5f9969033f15ec642fb464bd607368"),
    fe("1aa9d3fe4c644910f76b92b3e13b30d500dae5354e79508c3c49c8aa99e0258b"),
    fe("027ef04869e482b1c748638c59111c6b27095fa773e1aca078cea1f1c8450bdd"),
    fe("2b7d524c5172cbbb15db4e00668a8c449f67a2605d9ec03802e3fa136ad0b8fb"),
    fe("0c7c382443c6aa787c8718d86747c7f74693ae25b1e55df13f7c3c1dd735db0f"),
    fe("00b4567186bc3f7c62a7b56acf4f76207a1f43c2d30d0fe4a627dcdd9bd79078"),
    fe("1e41fc29b825454fe6d61737fe08b47fb07fe739e4c1e61d0337490883db4fd5"),
    fe("12507cd556b7bbcc72ee6dafc616584421e1af872d8c0e89002ae8d3ba0653b6"),
    fe("13d437083553006bcef312e5e6f52a5d97eb36617ef36fe4d77d3e97f71cb5db"),
    fe("163ec73251f85443687222487dda9a65467d90b22f0b38664686077c6a4486d5"),
];

/// Row-major 4x4 MDS matrix.
pub const MDS_T4: [[u8; 32]; 16] = [
    fe("236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad"),
    fe("277686494f7644bbc4a9b194e10724eb967f1dc58718e59e3cedc821b2a7ae19"),
    fe("023db68784e3f0cc0b85618826a9b3505129c16479973b0a84a4529e66b09c62"),
    fe("1d359d245f286c12d50d663bae733f978af08cdbd63017c57b3a75646ff382c1"),
    fe("2a75a171563b807db525be259699ab28fe9bc7fb1f70943ff049bc970e841a0c"),
    fe("083abff5e10051f078e2827d092e1ae808b4dd3e15ccc3706f38ce4157b6770e"),
    fe("1a5ad71bbbecd8a97dc49cfdbae303ad24d5c4741eab8b7568a9ff8253a1eb6f"),
    fe("0d745fd00dd167fb86772133640f02ce945004a7bc2c59e8790f725c5d84f0af"),
    fe("2070679e798782ef592a52ca9cef820d497ad2eecbaa7e42f366b3e521c4ed42"),
    fe("2e18c8570d20bf5df800739a53da75d906ece318cd224ab6b3a2be979e2d7eab"),
    fe("0fa86f0f27e4d3dd7f3367ce86f684f1f2e4386d3e5b9f38fa283c6aa723b608"),
    fe("03f3e6fab791f16628168e4b14dbaeb657035ee3da6b2ca83f0c2491e0b403eb"),
    fe("2f545e578202c9732488540e41f783b68ff0613fd79375f8ba8b3d30958e7677"),
    fe("23810bf82877fc19bff7eefeae3faf4bb8104c32ba4cd701596a15623d01476e"),
    fe("014fcd5eb0be6d5beeafc4944034cf321c068ef930f10be2207ed58d2a34cdd6"),
    fe("00c15fc3a1d5733dd835eae0823e377f8ba4a8b627627cc2bb661c25d20fb52a"),
];

pub const ROUND_CONSTANTS_T6: [[u8; 32]; 408] = [
    fe("1448614598e00f98e7ae7dea45fbd83bd968653ef8390cde2e86b706ad40c651"),
    fe("0ab7b291388e5c9e43c0dc1f591fb83ecdb65022e1b70af43b8a7b40c1dff7c3"),
    fe("2b7cbb217896f52c9a8c088e654af21e84cde754a3cef5b15c4d5466612d6adf"),
    fe("2bc6b0ddbe1d701b6570428bdc1ca1bf0da59ff3bbbb95fc2bc71c0c6e67a65c"),
    fe("123a55a31980384f3d20b2cecbc44ed60c38c11f7d20e9271efab9a905eefd3c"),
    fe("037501cc8c9dc819309a769f4df098e588b01858bc8eb7e279e2883be9fb8c53"),
    fe("1c2116e47e03a86bb11695b0a5f6dab6b9a460b1eb951ab01c259eca3fd47d51"),
    fe("2c18213489032e85a9c8cb8e9a65839bfaed13e57bc0fae49dbdaebf54f56f93"),
    fe("2ee8fed3d4d2c71a0429eafd8e5db1718f29e2227985fdf2ad8703c835b9e031"),
    fe("28c64d8f5ed7aac004c92029d9e9bf91ba9436d1cce94b9316d111c70a0c1714"),
    fe("18a01d9ffb747ae0de3e83c707f8b24f682c84f15abf571b34254a03478665e0"),
    fe("1c21d92bef197e73b234e4777b60db14e642a56cee71515d54e1ac71cde72bd3"),
    fe("0ad404ccbcb1e195897cb60c80981ebb9d66a6677dbbedad8b6455fe62d807b1"),
    fe("0a9b6de833064f93b6adb99af6c005945cb654cb7bd14c8b97af8b60cc1fb387"),
    fe("13129e3f930aed6d47690331ff09dc5160efa58ddce2c3e6180d45bec3aa3a6f"),
    fe("0d7a614c8991508ab1ce4895813bb1c82f18bf7bfc9e280ccca18079839387f1"),
    fe("0532f7ec36e30041b0486986875c913a49bddf2f5af5febe8c31f2f4094ffea5"),
    fe("06bbcb8e8e180201293e712f4950f1b0bbee808c9d64263c84d9d8ae155cb892"),
    fe("0f558a4db1a3ac07f61e2e6bee947f73586bf40f211ceb4f687ca5678a9dcb33"),
    fe("2be140a60b5b5f2f8edd78a818a969b20c643e419bcf0b577c24a0d0e7acfe98"),
    fe("1c49c4b9a9f09f7b9ad5f74ebacc710512b8e867bace27cb0dea06e89b96f631"),
    fe("170c1a732721b12cde7f33e476a39a1aa77a81c06e2eac503847b00d597652db"),
    fe("19c27d0e52f65ca34f4e31a068e49331c6bfc39d9241f9d4c302041615cf27f1"),
    fe("2f1bdc5254f9220c1a731fc5276964dab26b385fa40b6b04bed9960e2543ba08"),
    fe("05b42d2fbccbf4d39d2be9339cabe9d0dc6d921e855cd91154b639d28d4a1cf0"),
    fe("1220040715a41ad59f4f410e0c05a42c5fd32ac52fe9d06f88188d71f61e0935"),
    fe("25f9526526155b83946609f7bb9507dd4925ef871dee916d9144ebb4ece1343c"),
    fe("017bfe4284299ae7740b6d0e204951e314a8a5d0452419147978a95b34742444"),
    fe("2a5d4764021ca71d78a9674cb6708f1588d2ceaf3578c4111cf8b359eef089cf"),
    fe("17f02dab745fbe3c081321fe5cef845e7b8d070b2514d29b2a7b7d89cc0815da"),
    fe("19da62626db7199b65f4adcf57fa4a3dbaa1764a7bd155708ee6f378c89ef013"),
    fe("0f88e295fa2ed81b426c91fa69366a73edf75f39bf18634cd266ec4038829e05"),
    fe("1fe31c5548546c7948fe4ee1bd7412e3280eff7d20cb09aa85f49f2766148017"),
    fe("10fdc1613bdbf67f38bdde561b2f91e4cc48b59f98d643638fdc0afadbfe126e"),
    fe("1f2618c2ebe9574508b9c52f0000e33ebfddad1a03fdd6bca6ef7f0093127bef"),
    fe("129fe7fc3efac6a8ab23dba6d886f394da11f5953cf98e28269a0dba2a745dd3"),
    fe("15afd4cdf1e4f820c1631d4ab85ca4ba3bafcfee72beade9fae60523102448e3"),
    fe("1f2c74ba5c367e370d728e71e15b268851a7bb8b45528cb734956079ac99b012"),
    fe("1130e1872d76f2f9369cf59b95edf9ce19f01fa89c9c36b26e09def6786dad3c"),
    fe("13523d173f7e6badb73b63fc1c9bbdbee242c61bc68656493327533a5c1b1dca"),
    fe("14da40d0af427a65f1841b5adc96538653368f7254cb5667ddadbbad7a574cd4"),
    fe("0091f96400e4297ea85bb186c17b304e82638e57fd631ff6315976e1a5dd8b86"),
    fe("303329bf9031c5515b9a34d49a64bb6a0267bc7b54a0deca5c450277a002cdcb"),
    fe("14ed47e55c1da1c2f05d3c1a1b2e6c18509fc8336ecfe9db737916e283fa821b"),
    fe("1161f10b357775d810ad53bcc4a20d5add2b03251c747deb04ee94c565e58d6b"),
    fe("17a8a50ae72ce707f22bc070eb992851ca914eb94cc68eafbb8a96a714eb8221"),
    fe("1a6c61d795dbaf62f99250b37ec5df88645a1c153791db6312b932dc250e4f62"),
    fe("1f8bd2ab8aa840664c4eee198c4684dc4b05772bb2a0869da6722b15f447a133"),
    fe("1ffcb852a4f0027a9799f131cd74b98ccfb8cbc06349d8fefcc62f10c8fb3e2f"),
    fe("035e742ec52f19b36d489c720f467ffad77cd53bc2db5dddb246b23021f79f18"),
    fe("1dfaaee41bdf94d783aa29fc62b7ec7b55673aa818d305fd42d175a05f2e3d86"),
    fe("2821378477a02e995005a5635088540945bd333f2d1455f038a219b8c4796b3a"),
    fe("1db4a4d0f238a570b1061c6eec81c02f31ffdd4a7c19e763174f238d04897421"),
    fe("14bf7889457b20b7a1367b34a3a538217d693b52426aff40a4bb72893b1784ca"),
    fe("2ced52c2bf296f87e57410c3ec9a9483a796d164f6049127109ff0d3a9c08465"),
    fe("1ddeac5805a7f4ada4d0441ed108e3149d4ce6584f49ae5bdfd46d6766eea334"),
    fe("2e36b4e5e9c97b462304e8e2b5f9dc88e1c9f2161ba040673f911123f042ae70"),
    fe("0c6840d1cb0666dc59e89b1865275d8a164b447c5ed64347caee63502c238d5e"),
    fe("137e2e3e89e71d461f4c9bc3e8f12183262a4d1db55c589b2caeaac01238f58c"),
    fe("250932e7b0adcf2c84ed4bfb60a36b6b82e55aa94751157b1d45794b081c8aad"),
    fe("170a7292f5634c06dd3bf09ab5c9c4ecd4b00d5ce2f35f972b4555391f16b42d"),
    fe("0d68cbbe77289e78d5cbf51d70f1b75ba215df4e7bd0149d10b2c50f2a4f3b81"),
    fe("0caf74563b90525f645a6d2036ecd1306fa1dc680b49d9ce4ed24c9749973178"),
    fe("20a7d1c0a27fcce78ffe372f4c58306b166f9456ed46cdeb255e395b7d30d42a"),
    fe("0623f3226b5470b2789b8a53040e44443385e96b9cfa0be4d35015158a468465"),
    fe("1632308688c25e790f57d68a5350241242a56305347de4a5009ce46b8cdcb91f"),
    fe("2de4793a6f99cd14e3f6642211f4d0b7bcfa361597c544ffcb5a567e9076f47f"),
    fe("1d4d06d19ea1b09cad79086d51bde11725a554fa99559ca2f09f3bb73d728c66"),
    fe("0480e7479a66a7cd9ea61c8b28974389908350abc4aafc18cd75e33dd130c144"),
    fe("30430b03368ebcaa91246960490bcf917d78681463e2e7d744bfb44335dac24d"),
    fe("0b57b37320127d4c50f269124b0dbdcb2b1f1352241a5d12103283e089c0c742"),
    fe("2cf4890650d27240e195f60a4f698eda249b8dd614b23376b50178d2df6d2b8f"),
    fe("1e221c5526898bfd12de86851a0d9703751a2f239008ab5f9b7d3b6911c64184"),
    fe("28e07485ad7d992ed1a58f329ca12adce4ec693ebddbb2952e54d339f2eebda5"),
    fe("2f44d64f84de16dc67bd5ead51efb1dc8381c84520c12854dd5ef3a079acd4e0"),
    fe("050a76bc32ebd1dfe2be330f304edc7ace7167ab7ba1516f4021c62cf0d4fac2"),
    fe("2f58c45e5d659a67d781367241f6c35d8cb46361d97b28947d29421c270594a9"),
    fe("25e8da9ae0e42e840e04b230370e782bdb67534844325ba36fc7e5e160c66a74"),
    fe("2fec734da20fe32003ea04f127f844724f38a368ba10c29544252be796040f7f"),
    fe("288a6778f3a83988a8ed1727f15e93b4cb14f4e3a3bbb91dd6d1facafffd5eef"),
    fe("20dcc6c75fd89259be7f406750b3db679a25a8cd2715d245b9175390ac922c84"),
    fe("17f42ba10942df25cb8a541782a18b6fd31cf965d11178c7b04ac45b4dea5dd3"),
    fe("028eeb85d115a904020e0c6148eec6603e9cedabc664abee764aafd455986ba5"),
    fe("0b1d7cecf3a79b2ad3fa298f6cea7ae95d80c0299ecc918e9f8c9c3d38d59d40"),
    fe("0440339c9764cec79c16efdb834a26261db8e3f12ce1cf722d23c0e11ff4cf07"),
    fe("06ca647c29727c1962a002177da2d504f4b07a5f7eb57c79b88e6b7abbbdad5c"),
    fe("2ea120a864f5c4093dd1a962e8f013c7b8ef778b04d2ba5bfc3cab28619ba9e3"),
    fe("2bb737546c4aee7c0cc2ba87c1157e2a77c479ebfb5dc76adbb39cf8697633fd"),
    fe("0e30da6490625d33e79cd50176f568f9a2c28c2f449a2bd51a25d15686803a93"),
    fe("0df7ca7278a13650b919d85497b2ebb0f71035a7c20430d4131d903ab7f57521"),
    fe("27cc589f5bf585794abace589fb8a74a2f784c0990b80fcaa6944097f870e2d5"),
    fe("2255c36a38c8735de45cedf452afa842332d33042f78e60c43c7455421b325bf"),
    fe("133d9602bd3378d69f681c27b05bdffc98b7d86cca63d73a60caed485784d087"),
    fe("0e1548e942ae9d3e26860699b93727c817a9948616c93ef4accd981b1dc3d78a"),
    fe("0f20f0e55d93689fe09ec312f6af47627482e4bde0a1602a8e2c8d6e84e8a6ae"),
    fe("2e52328483cb5b7ff2eb4e45b12e51b26232c9bc17b7292954c0a9f6bfa51bb9"),
    fe("02b2162d533e059a6eda2abb74712edb3a7860beea95dd8a4abfc957660804f4"),
    fe("19e0927715d1cc6d389429947fb3737dad733974c6b2e13e5b3d432519516c74"),
    fe("0d3a800457d77785636303b8b94f17dcffcb46048872ac9f74ef7f27ee573705"),
    fe("2c974d1952557a1aac5f7bae4996616da619b73f441c4e504dc8fe9cfb559e32"),
    fe("0766bfeeede2ccf3708e1b4ff30714c22c1d434cdbe8f55514babc2dd5d97bef"),
    fe("23dac8ea54082fc131e173ae55e4630cd4ca7c871b2a0a479c1e74e7f191e62c"),
    fe("17d5fb6c2cb37010e3e358ab2d575376870ed33186b8eae49ad3b47e340a8d7f"),
    fe("175dcac76d8a8126139b583ae38853290246e43e783fa6903ec8007f178c0023"),
    fe("0c4fd08fede5d221adb7abf549898c91e5be7e85bf1fd2a611bf182cc2e71655"),
    fe("277934b909e72d3a3475bb1ec766ab7a38ad59b128303fc5002f02a65bdfe729"),
    fe("0e88349998dfe703f1b184524f9c394d6004ccacf9cb952896e8cfdb0b078b68"),
    fe("1f1b2078b60b0fce07824e2a2bc8cae8ee673514b0070a8b45710cc78cbb9942"),
    fe("2eb1559566c536ddbc316f6482d51fa340557657700f5b8a846e812a0ed334d1"),
    fe("1c4dbdc335cf6764355208b4c9d243d34541d623c669dec2c3ba066bbeaf6773"),
    fe("2374a6b2da6f8cab8e5cfe8d805dd3a2dfca1e8b7eba5dc8574021fd1241e3b4"),
    fe("19dd342533ccc603a99738e3fb5a569b94ef71b3e49f90fb874f6161733072f4"),
    fe("217d66db6c7fb3effa508800587d2eb3c6d03d8385132f2fcce7f35f2705cccf"),
    fe("0815fb8591fe01038cd3a3b38b236f9efca77c618d3bfc6c2a7fa89296c7e64f"),
    fe("2bb943b40c2bd456a6c17853b1ca88eb0ff36f5974b2ff9a5f5093e9bf63a16f"),
    fe("11a5153fce659513ee7cb9974ae6cba581e3b4cd14570c5709fec3d8d3fc82e9"),
    fe("1b72bfd07635d8501b2eff8785a2495bae74c7653cf90e6d5c9f144426836df4"),
    fe("14902c0700eec897ae178ba8caf850d793f1d87512bea0ecea39cf6b1fee233d"),
    fe("09c138c6e0a616a49ff90d43a6b043f3b745b78865856dc4c1a45e2fd84cb3f4"),
    fe("05b58a3dce57b281a271d69895052d887458a715783e8317e024a61a35ec10bc"),
    fe("2be8d29525c0cfdd5e6b3125e3bde3bf558e55fbe867f024457a96765474d037"),
    fe("061d72f78f1ba9dc6b4d7f7784225d6a81bdfc1b5ad6c24369f9c0560523d9ad"),
    fe("0bf18aefcacffabdf4112eddadca6145738b4803b36145bb9516db501a0692e9"),
    fe("2e73dd105fa8b2ec931d8cdf29ec679e3a9801a93071a7d5ea30659255f03bc6"),
    fe("0f8440ef667c9ae81337ba5d8c927a5347de7296860b211cad1ecbfb5d3598ef"),
    fe("004d303b2dea627b2731be83f93ac34e7d14d178a13800558ca7396395eb118f"),
    fe("234541ad72040a70da2996a35269230c94699eef313a4d480508008cbc3d37c1"),
    fe("0d123f1e72d26b92bdd8fd73d14286c312ad4c23acb46b2e08c157104409e174"),
    fe("2fb360776f0de79d7098ee7aa4123c05ee6b05a8be460a774f3a048e138545bb"),
    fe("03685c079434e167276c57d3cc79703b7dfdc41c156ea1e8b7f99b6956a55326"),
    fe("260af0e0fffcc9772c1631b179344566b47aaada3681eb9034c6f75c3705c1c7"),
    fe("2862b41374f89b695274b33b773f2554916e2bff9ff672545fc2f49563f62767"),
    fe("02a9912fe170310227189ea1e691d0362f18b38b400b0eff192ca59513eba8d5"),
    fe("08e513ade694a0d8ac1f3ebf1a96440d32c713d5058e1224e070348c281f4a6f"),
    fe("140a4a431e2ee79400ed7465978d84773213c628264ff80f21ac7a6b673d09ab"),
    fe("296af4d019cb5df7d959b29d549c3f071202b4eba8b53dc5ee979ed143377927"),
    fe("01832e284a7f4c81614882b6939fc0f185573bd2023e3e505765470bb812b349"),
    fe("1a84d56a67bfdd3d965abdcd329aa78d4fe93434496f2d103861fd19d66d7260"),
    fe("040cb82847773927d2aefdc07489037a9d1f7631eca75c9fb0dda0cb9dbde143"),
    fe("010dcf084cc29cb7caecf26aa633bce4ed2b019f2887cee7b1a78f89d3fabe2f"),
    fe("07edc22a0911ea214425ef542b776db23b0fe5817810d40c72ca98aabd9afa83"),
    fe("2eea4ab08aec775f2148479ea36fbb96936da58ba48bd1d2d3acd48173aaabe7"),
    fe("1e40c0e8257fe4a61005cdcfad148cf7f47d1b5cfddfaa082738695518245f19"),
    fe("23a27809583bd1ea51f436de5443e108f69d44cdf51dc1f03e21948b4980b876"),
    fe("2e4652b044dbfe40e63b6b232fcd5f3f39abfbd2051ee68adc754080d49250a9"),
    fe("11e7abdb6ecbafc2e7d8cdefe9c7b9c50475eb475db3c2caf7f7d67f485775f2"),
    fe("199d52350cc30e8c73821f802096f0e547a13551b27bf6b899396f63ac5cf8e7"),
    fe("0f575d6ee67cbecd98345624e032a37c859a7cbef30b3fddc949cd0978484101"),
    fe("1c4b6f9a2ae2b418e6265acba9c96b06184d07028e5fb784f3475ae7772ff057"),
    fe("2dcb5cf8896de39f228e157c0c5593f4626fb9bc225206383db20360abf0c925"),
    fe("1340abb9f4e113186bdc26cbdf4bcca50b531a107f863ca544575e3cf870f8e1"),
    fe("2368e692b72787cb8870ea888e714e006f59d2b4460cfb74c48a8cc73b1d1a5b"),
    fe("1fab9add9baa4a4f56f23165775c6f2d922a7632a94f96374b7dc852756f54b6"),
    fe("0c7f7b82300d3c6ce3f8957ba1e4add54c4c015e20d9765d220571c16ab8680f"),
    fe("15d63e86beacd93c6083688e5d9c8f3c6947929f9f1f99ab578a4c3a922eff03"),
    fe("0be843ae5f9b07e52572178af7dae8ed05d36b12c0607862929355ea74023d9e"),
    fe("1332749c523694cb6935e0963a07e81b05967ce1d950c0b731058ec92a7a0c9a"),
    fe("25439408810e074c0bdd4598b9815fee892bb95ca51029ecf009bffa5b9b9682"),
    fe("057e8d19dd999a918da29b0940b383ba9fd15db0b0f64996dff67feb55f9a742"),
    fe("1e014e37e9b117cf3b4870d999f2b55d3534d0a6be98e9e357fa43f01e70a29d"),
    fe("1a4ed24e6e03aebcd6bdb100533dc966597afe15c851b4b863f6e889084c6479"),
    fe("253420007083f1aa863ad4760905c1039ed4111c9f053f27710452f83ce36a90"),
    fe("2276a1441971709affe6d2a99320001ec45ec72155c575ddeecac0e32759ab06"),
    fe("28957dd1218ea799fd3411eb19325853adf7ae8ae1281f753302fe7d31dfa7b0"),
    fe("2fd925726ab794c88bd75796aa3e7f1e6692f2914cf802267ddf01e37902a008"),
    fe("1cf8a5c9c76a84b147c8238d9253cd55b47c0c43d82966c4636a28674705fd9a"),
    fe("0373cbbc306e1bab9e7077368715e6230b4b2e2e4a1db9c674b8c359a41e9108"),
    fe("060283d2fe7f23dff513d9110b3dc62448bc48f531ce0c1eab5920bf23290a40"),
    fe("0dab465d6d910740f33ef6cc0eadc71bf8119bdfd5a3527dc8bbfadfaa40263c"),
    fe("0cba7bcbc8224b2a8e4aba17977230a686cd6421dc0ca5346f3446b62439c4c3"),
    fe("1e4365db0790c9c4f445b0653c466ff21db96c38b4076ba8bd68bcb4dea6911d"),
    fe("1bb2dba2199a9ab3bc86ef5f9de7f6c5ca13d60eab42ced68de98fc643800a8d"),
    fe("0ad3c1870c6d6ef40eebad52123cd1a2913d9d62e80bfbacae812e082021f9ca"),
    fe("01b098c91e7b0cbb5c34588077c0ddf95300ddf614935630c0ce3a2627245308"),
    fe("19fd5c0eac14fae7598bd4ceea3b1e2998b0c168493b6d72ae41b576e55b9c3f"),
    fe("0d4749d79cc163f17110a404a46fe427c6434f3fe67b7e7b4ccfa6ab95bd7e18"),
    fe("1ebbfe8114a41bb809e0b33399241232eb940ad8728c8a516d40ada440dbfdcf"),
    fe("2704e5b6133d9764d6d3f17d49d833223e3937f80eb9faeabbfba9baf4b4c1b8"),
    fe("2165e1c8027305b1ae0e323571635e5d540d13d710c3f9a390b6913f14d035e3"),
    fe("2e3497e4d35fda596c06afa63bc3a0f2e55d4eeba4aceb60e65081ad63aa8b8a"),
    fe("031da4345eecd6db6c0f7b07c7815d7add1fe0546d738f4d79ab5c57aa841edf"),
    fe("089ece54e47aa5c908e43e5f08737c1436967089006acab1c9cd19eac4a20876"),
    fe("2f53c15e2aded33c47f55a070483e6cc7f3821fbf8aa40677d0552ed9d10d847"),
    fe("142aa34f4b2e8ad0df7a21b3e39c00c8b0aa2857094801eaafd72befed077f93"),
    fe("17aea4da4c7bcf0d7588b014eb8b40979dd2725eda4e6ace331982467c7ff2bf"),
    fe("0e970c19d19748d8c465104d8f02200363f9a41786f02f1827742b20dc0d1727"),
    fe("04bcad9e553795642f59baf714a6bdb432fc45a0a0b77f1aba3a9823476df9b9"),
    fe("242c0bfbcdaa76f715dbd4ba825c71fcfed671c1b1901fa484c87f810315d0ce"),
    fe("25db1343c24104071023fb6ed34d9909078311e1efe85af0a11b19114fa9e790"),
    fe("2ffe4d9c420a59e9cdc7c31ab2bf35187ca147cb898a3942deb3677786036a80"),
    fe("125bb03af3e2cf18bbe6f5b590eb3bf8d0d1ba63be696483e98f283bc7cd07a3"),
    fe("0816be42745b7dbb4ceffe5b8e24ea60fd8b719deba50037ac7b75948745c6bc"),
    fe("111160f9acf6ec360d1b6a712313a0dbcbe23e64420055471d2ee4c5dedb35d4"),
    fe("1377978e1b1f6a8925fa8e7b7941bdf8fb59ab9542342419283d8203435c9391"),
    fe("0defc1d8882166ef3ccde53a4f236fba83d384621937cee57e421a513d0d3397"),
    fe("2f8fa5c78c706e3a5d4a03f2a7a3953046d7e94cb88a7ef350e67b5ba0f0debf"),
    fe("1a2a957ec0a723da61c2134bab0bf17beb00e6dcd84690c230dcb9e58da94827"),
    fe("1cdf8710995f5e03412b4a7f699532f9fd01f0ea167a8dfc1ddf37e2805addef"),
    fe("26fd31471828c36ae36c27b748054b0c0c4fe5239b301699e3765eebecc18946"),
    fe("0775d996cc2c4456f303a2c1f9007647e11a921d9fea3f7b926143b99d2fa0be"),
    fe("016fb9337708ca638cdfda91bd0daea6b97224ef7b2062672addd1bd18bb8900"),
    fe("2c392fbe7d3fde42fca4f9478bb439331258255356f184af6f76f119054117d7"),
    fe("187a2a3bf79a69fa3e5089ef9f1fd56fdb47c55eece77aa228aa3de1b486bcb1"),
    fe("0271a863a280a32641ffa33510b2edd278c98630359532f3e506b275fd5d20ce"),
    fe("1557459c9c74c94aa00e5af69a1e3112fb69537ce897ec0c718958d96516f2ab"),
    fe("2a8e26ca8d647d9a6388516ea9dcff89083d539e58168c2a50c6dae30f109f21"),
    fe("21cb752194cf43f3b51942eb0040eba9de2bcfb1c2a3fae97924b710f26832cd"),
    fe("2c26daf996be247acd6dd4acad60d38b5a471e6322188d02c137e7cb484377ec"),
    fe("0240176ee0e7982eebe92a68d3e3a38c26821acc0f5d058cf8c137bca2d26f1b"),
    fe("2636e0973c865c1bd974dd78daaa8d0a84cdaf6be1ad47ecf2a0d18f117318f2"),
    fe("19e84f4f25a799496041661dc5d975b681f6e06744cee89b7be5d9fde1744ac0"),
    fe("0ebf89064a3af247ca1f36f6f3570188e271e0b326c4fb26664e89e1454ca110"),
    fe("25c7e97b475be00e8b559a38c452364f4c9c531fecb8ac698f7fd73ce22e71ec"),
    fe("0444c99e592353e5aecaa302add901c14d8c55270a160afed4429ef5598ad74f"),
    fe("138db8887830565f2693d0e0f02e4e79e144967f0ba53b03519aba764b5c994a"),
    fe("24d40f462114fe9ee02aafcf74b4fca24e1ae365dc75c3b52bb13cbbb2f21edd"),
    fe("21e65d6d8ee43760bca40e730b5df4c4cf3a8a732db148f4b2951b4c61d68e8c"),
    fe("248dd79669ec09dbf0350a15d6c75c6a9bdaacefca14d51300978f13d1ab6d1c"),
    fe("2b8238c1548f9cbe29fd35cf91e7b48f0ebda7e639edf69fe8d5aba7924d5362"),
    fe("2439fd239257f38181c7be3cf513f1bf7235eba94f6b8942a94cbddecf6f62f7"),
    fe("200958235281a61ba2c4be0aa3282a18c74b6d262f5de7c2e33d2bb3e893dfec"),
    fe("0e1eca5df88ee5f60cfa7e1fe5befbb719fad8211fa9b2d02fcc233190c17f12"),
    fe("26b53427f9b3ea2c769d9c660fc60881a169c12732d001b7158ee4b1b842ca24"),
    fe("20f3b3f4acafe9f8af3e06661b3a8f778fa2812522b9d70a67402cff8db2b1b4"),
    fe("211e5d2b39d62520a7a627ece8cacbac9f97506def4ec286928ba6c27d463b17"),
    fe("0bb743ee34802129c556731aed9d302dcd085313ce572f6242d13832e536b4b4"),
    fe("23cb2661b488ee71e4c753ff23ae4bd25d8a44094f66b6532977e22140eba5cb"),
    fe("03a35aa3123911cdb4535baed3359f5f6a5205b9c93ef31d35323a47807b8bc9"),
    fe("27803848a0aed96a93fa943b6635e450217e137f4ade74a62d7917322714b697"),
    fe("0cb37839c2c9a7ff79884cbec75f41e9be5e47c76d61538231bd8162996d6f67"),
    fe("1f0026d0bf1f8e1dd5423cc2fec1fb5cdaa1ecdc4c3cb218dbceef77c00d2f93"),
    fe("02a7d7bb970b8a6ed2ee66fabbba956b6da3b100f5b5fb928eef42f9708273c9"),
    fe("0cfd7f4215e434c8da17ec3258b0bc605ad1ab2e90aa494351e4ee40bbc491fa"),
    fe("180b11b720622a156849dc6f7f6e7f571659be69682230c5ed9ac339700a7cde"),
    fe("04e96a965bce3d3a0a24a4a457c951582c871349ce7eee1aabfe578a94c65011"),
    fe("15931f782b45f7fb656f2cdbd1f7705c353a23fe1d30a5a46a1522ed160df3ad"),
    fe("2e296e57c97a5309acd26febf55ac963a5444c1c5f703ad88a0d7b97b9dd38b1"),
    fe("26157bceb78e846bbb262f9a1e06d4271bde5a5bce8f0419952f97ffd13eaca8"),
    fe("2194eb89847d6b0f1897f675f19c0c56b61b13248eff3ca36e34fb9d1c79ee43"),
    fe("2350bf35477656899151ad7dde96ea7857e15501447008dab6b3d27c8ffa274f"),
    fe("1a486f0ae591cacdaf09c58a49c4d1795405435340819e003f0469d110b7752b"),
    fe("1b56dcf76fb23cc4a834d455a4065e133571402b7df309d59bc3105d42a8c301"),
    fe("1a749d7964af0b7202913ef204c653f2b4bfb65ceab7b685233ab59ce3bb6925"),
    fe("18ae590073f969696af762ffa4e8f0ebbf97f8cc787e37cddd1f321be3beadbb"),
    fe("21c47b275d82dde6460d5e769a99421144b1c5a9da59294ade9cbb317103f249"),
    fe("0473ddbd52e737e527364e8eb63207975c38d5fd6cc32b272102b082cd1518fb"),
    fe("0b12fac95b6d3a881d892657c8424e645ac4e6b00515f902d594574302b26e02"),
    fe("08ae7616a260cf6657f8f73ac284588d2c5f07ff425d837aa7cdcef63e3e2103"),
    fe("039daf6876280b80e873bf2a32fd2834a83c69757badd58a888ef819e926ce28"),
    fe("25e7b1d7470a3c75f13f0b56546c8e09f2d8efeff06ef766f9c783ca869d130d"),
    fe("1e8fd3634c3ff764184d03435f98584b11b5b15aeb9c75262da3f1ea2c2a9e7a"),
    fe("241dcc51ac37808a415dd1e3c281f05aff11789dc0cafdd77a35484e0993f9a4"),
    fe("1ffc3153c56ef9755932cea2be0573749bdafe1c4fa0781a4b8b4078ce9d7547"),
    fe("17630d62d9a3e510c88a4d43c360f92bc0fa00b66031adec29bd9543fd3a17ee"),
    fe("2980400edd1d74e3d69db5458d2ccd5fabdb236ec16a82a4301a0ab59ea4a6e9"),
    fe("3034fb24366123ec6dcafcad35726dbfb16194c036dcd648fa69439bfcd00cd4"),
    fe("1aa7e8f4189ca9dff3db2ab7648be0a2392995ce46041e04680dca8ad7232df0"),
    fe("1fa195f834a69e62372f60eb497da167646eae14153d803b39dc5d11f5d7800b"),
    fe("0f23f1c74d5fbf6195ad5a6aee5e56993c5477e8453f5b93a0d7bafd333036d3"),
    fe("016556fac9348a735ab50aa089c97151b3caaf0a20a34fb9d9370505a1515729"),
    fe("23d92b793648110fc5aeef0633f0c77cacb0dbbca1879b8a6f6e5df445e5f70b"),
    fe("2e4c10ec5e65e2f239bbc43c13031df2686ab40fd79a304b05d611b823f23b73"),
    fe("12418bbfd77b63ad5e16864ad9c32ffbfc5a3dd9b78ec2b79329fe5e0a8d2953"),
    fe("1e4a8aace15abc1d5b76a9e848431d2c06a78f72b6bebb1293e6c58e5185696d"),
    fe("0f3e96107decdbd6872c20ea09acf92cdf17a3ee1d1331488092d96176deb755"),
    fe("012c3780207f395cc21deb0abd951681eea32498ddba6ce897a8f9f0c2357067"),
    fe("13eab1b4e672ba1b1c1bb901769301f1e5659d03ea10c61de2477ff0ac221421"),
    fe("20dc664abb20b7456c06629ce37a1ecb1a27a4e8b24e31b48b9c4635aa30323e"),
    fe("2c6b1e2cfea78e2c36785e76a8cfb1b057e9471f24f5b391175c3decb01e000f"),
    fe("188c926255f5b7af3da96355729c2a8670ab4c2c70400481b2ac903740e0c5ab"),
    fe("2f9913208e09e3d6e9e6fba6384fd076ab89f2662976e3e30e0870bb30eb54f2"),
    fe("2b33803d90889706e714f720b5628d26fb60b545a1f3e9ce49a6ae912b024086"),
    fe("26ccabc10eb04327cb5cc3dde2abb36f097086c97e738c133c9f57077e748b09"),
    fe("1b16ae0d7c54408cb75fd931f246751f2b0c3dc20d79e82a2531b76c22b4d5df"),
    fe("11d0bb461bd8af2844f49f0f840c94ef9518b2511344742d1f5438fe3d415ae4"),
    fe("233031847b476bead0118d3db338e89133ec420d673e504ad647259df655571e"),
    fe("1f84e97895bee438eb3c92dc9b1846c9ad29c164387b06aeb6ed1841ed8c4dca"),
    fe("277f7f9b542f0c2bb5f45bed054f09624536010c3cf9452d2273193327f801d6"),
    fe("1efc9c9069e5068baac13d2e6645641b7d27e80fc23077161535c44682ee57a9"),
    fe("0d6ec477761e2efbac4f14b3bf3d5257a99e64c3f25fe104faf988b20fe5ff44"),
    fe("0e0e7d7c5501999b7d16173b59b7cae1f203bef21aebf00251881439ccf93013"),
    fe("217bef2f4f12c6dcc91c2058a23391cb77de53ca6e44dcdc6ea3d36fea326ea6"),
    fe("05780c88adf01531b50f817e3fe44447d29b35aa8a389c71e8cf1226acef68ba"),
    fe("18733887a6b2b3b4c90d8e4990196e23445e47d7ea5939ebfb89a3ee3d67b4bd"),
    fe("20bace63acfcae0b1c9f2bee24b8e9da85ba597d37b0905720c4f15db231b07a"),
    fe("166ea595375a6786ac527ee9eced73ed6bf550876abcaf3ac92b42c808b00d8f"),
    fe("304262a9eff4040acf43e322d6f52676ae2f853ec2e7a80db00c488cf917c74e"),
    fe("226bac7050166e5f6db78cd0b12d36f305b6e8c9a055114ad7709e6f57245b6b"),
    fe("26b2f539c573829f6aca91baa954505bc5c3eb4e1df1d638582717fbdf2388cc"),
    fe("06a0fbf4cd52e93ba5e4c6c4af65db02ee96297f8ad200f2f1cff252e769b551"),
    fe("2cb9c24112d35341aceac88360fb528924e58b6ecac321b9fb29e6aa3368ff23"),
    fe("20e88a4d607526dd07fe08a3552a44669129eb87fcc0b13aac8fe8afd9301521"),
    fe("1544649a2bd73e3ba72f396df91dd65401dd8faf51de325fbaedb9d536ad94fc"),
    fe("1980077457995712c44da7e17713258e3f8eb354bfd80ed9eaf3ecbaf6960105"),
    fe("25d1d22ff13e7705d3c085f97fc4e4f6914b82ffaa5d2091ec64dac423765ef7"),
    fe("2fec990ef556efe1035a464ff5581e74067445cd54abcaf6b8c0399fe0d24cfc"),
    fe("1bd9563506d9544ef3e4830e13545012c579379c2dcc1330416c4ae49bc4ec61"),
    fe("00affcd17ba6003c56dfa85571fc29737b225a80d480e7dd7edec01f14f23010"),
    fe("23670dbaef966881f07f919a2d883128c7b23cf767a477b2b2e0762bc0dbc18b"),
    fe("1f93a532917394c7e22fd17abeea6389c66fd7ae2dd9f02f860f6d96947f0edd"),
    fe("2de42e9f537b7d61b0213771c0e74f555512be07b6a50934734e2c5beb40be37"),
    fe("25c557f45b99781cd37d3bb22931662a67f78b37782c885b456bb96d55e88404"),
    fe("2074c8b709705c9888538a7f8a3c4aff647731bd16f8e254fa74ea9f2be7662c"),
    fe("2738355956298138949e442171d6a4e4b74ef2065740db7cfc3a0b60fd573acb"),
    fe("13d36ad0a4ebeb81969778649659c65cb7d0c41cc519871fdb71a9ea6a0caa56"),
    fe("08a2c18ba41381348c1acfbf9617716806b462a1691bc2e343b79b8085e376b0"),
    fe("059092fc395aed285807bbf557ad9a1041f59c079822b1088457882fee7b612c"),
    fe("161924151b5a5ad2d8cac119522a991a906f15e8531dc70567f6b28371cc24e3"),
    fe("1c68ca8f7aa17659075405ef6341b8e69a298b9a4d72f3bb854b309e4ba87a1b"),
    fe("27f5d03bca1c8207f7239a4b2cf73ae559a15aa37e7bdddf3aab05eec5ce5592"),
    fe("0ecbff4846962a975d347ea9a8fc465fb46861557622f2c2564a7e639833c169"),
    fe("277c4de2363d8b5b456cfc5a7ff8e46ff2ec8daa59855f5ad64bc0521f3ac567"),
    fe("1b11862c52acd351b7a464793f4fbb57fec99f832b63226f95d175c8d2fc08b2"),
    fe("06a719c584c74ffbdd7218eb565cb4c8bd86c92e3dfb3c73e1527201aa51234e"),
    fe("230e4adeecb799877f7ce9a58c836b99d533584a195c1d77a313abe1c7d126bd"),
    fe("10b109b864809c4767a133cce6cbad6c88628173b8ea51e8cca85830ca7de522"),
    fe("0e21117970dcfbd4b1526b253636f377538d3b4faaeb5a8b24bf6200d14cc591"),
    fe("2667349978401362f6b17939eeb0e64ff55607ebdb35c7071db46bb3e7ba4778"),
    fe("05000fa5fda505e029a13bfe304c267b0d86c72c039babf6d3ff02ee246be02e"),
    fe("264d9e094aed5f41a60242220a34a284089087b2436a9bfce8174cc9be8c2e20"),
    fe("08076f9c4743de6130ff622cf401edd2c92f24bfe114f3c5e724891746315c47"),
    fe("132370abddbb0b1dd57f2a520c25336bd7cede94b95bbf5c2151d6d88e641b64"),
    fe("08ff1116b7a227bfdfd4465a67890882b615c8c4c17f28d8d24958edf602ddcb"),
    fe("2bcb0b0db8b9e3e02b7e9c1c9460fdd9c6cd98562332e648d8a3e0ab94597520"),
    fe("12ea68ce6881becad7f8a6b117b03ab976f7abd597f903b0bf230d20d21a943a"),
    fe("27439c98a76688067a097b19b6fdd7d78d5f88e274e0d8fea5ea6b7406fdda7f"),
    fe("02f40d0ad05f5652e31ef9440ad71ebc8419e393493937f05f00499d02a99e36"),
    fe("2fbf04284327ee4f680f06bd390e309d0d13acc74b9c5b14b63059b8cc7abff5"),
    fe("1be686d53e2a8ad57a828b0651425cfc6978c7027edbf247f6b6723c21df86e7"),
    fe("2683b425e85a508f96852f14b4220fcfe9f7ad8b17bfefc0e348c47ca78bb57f"),
    fe("16dace9b2e8012e31db1c7ebe672d86bbe61a1aa3e1693e0eddfc0de0a9dd951"),
    fe("27a321f8c7d3c9022e962f7fef2e3c848b4539dbb75aa139f30430fe545bcedb"),
    fe("06ccd7210dee1d6b0e22b79e12d19082d8078b788d71007b95e7a774ed86a651"),
    fe("0a41dd42221653752bef350f6d74a917b6cbb1fd76a3a12166f4d0be978e4026"),
    fe("220a02881e4d47ac94d950cdf8386274d1782e27cbd0d845978deec91298f165"),
    fe("0e2155a545fe5f3cbb6397606589eac19cd92639339c6b017298a4ad3408b4b9"),
    fe("0f0f19c6291e51546a267c60cc774e5fb9d088bac530782d891ec1af4b847073"),
    fe("0e925bcd1c6ddb4a3a1c67ec8deefbd40c53c0d33e7aeef1b46795aed5943c9d"),
    fe("2ad000b1748abb812cd6e5411286b9ff3ef0a5bd3d259a36e45ef05b9eb5beeb"),
    fe("0a65aa232d32ed6e8de63d1cdffebc2f3fa616465c27aaf97e8cd3dcff648652"),
    fe("0263d8470ab4b1c61d74d8e896242f4f261dcb167a3a06923893d7cb2c93d6a1"),
    fe("2901d946addc94b040fd58004d9a5f8cd1926540c7a8612cec1c58cb60c2b3a5"),
    fe("1889cfa8209f4952df9022db9dc583b5717a0696da41cee64937d0cd6321e693"),
    fe("236064d71cb6c64c84747ac25fcf8d881502e5f03bff87561b85a116b1f39aca"),
    fe("2ff7a174ffcec29862e04f5dbdc73ebf3661570033576290c0c1f6cd8ced27ae"),
    fe("19e724a1d742cab103455f0040edf745a2696a71084c93e322715450dd4d6f5b"),
    fe("03eed3892b6f0e6c5da1059c5f3793985835aa283500a8129904a94c87f161bf"),
    fe("08e2b8273bfa30c1ac850306d91e468a9e8d05092aee4cbc80c687248463ba30"),
    fe("07adcca76d8337728839a1b6ac3b3ed42afb87d72af98f52f416f2ec58b28cec"),
    fe("171ef37896bae2b1020a0a5839bd51784ce11bb4237d548c171169d32fa19b40"),
    fe("20ffdfcb86f4d005064edbc296918c332d32fbeff1729de5056a26abbc3a35fa"),
    fe("08ecd7a6f1735eed86baa094e608f488f38dbb398fcfed4b994383a0ca8e4647"),
    fe("1c3f5d86e5921fde9890189f1d8c618754288600e6928bc182ac4d5e4c9f0ccb"),
    fe("29c61184ed9d460f337558a1af639aa7e3c0975e4014ed8ebcad4a25d51eabf3"),
    fe("0defd45b28958728228adbb2dbdaef6a5e9b1a64902a734f402b8cefb8ab3b56"),
    fe("0a74ea22d8a09336060610179ac1d82fffa9492df76deed4ea60e0133b0811a8"),
    fe("03a37bf12daf1400d297ac4ac13ba24c17dc262db16c8523deee4e0ccde9a680"),
    fe("11fe1790d5abbf5935ff22318e4f7ffe69966ada2f9136b54f830eacb0a65368"),
    fe("018165842f406375f2346686915afb14bf1fe0564c8858ee3bde0aba3de5f68f"),
    fe("261db25e7cff5a9fb72f276b1f9260b667300fb7d361b50fd5c0e8b6995b05f9"),
    fe("2a3ac3314b2b66e796fbe36df778c5e46972320cc43ec807048826b6704ba7c4"),
    fe("23caa4b80ecfa99e9d3fea2bbc1dbbf369d1bfc8937d03d074061c30fd8cd76b"),
    fe("27db260085e224898df145f23f635f2066d8e4e124e581e8c6261929b1dfe107"),
    fe("274f6c5fd34a784d6b915ef05d424ee6c0babbf369e79ab138b8167b5618ec7f"),
    fe("2c3a29e13a84d26a0911c9289daf1aa4cf5840aada0701d57e23dfc796da6da1"),
    fe("1ea210f2001a334d3e801f4e53270d42da7aaf317a553b4282aa78eaa2282e6d"),
    fe("254dbeb52884b699c1ba7fa0d6e80d610903b18a3e509c36351ccc3b024946e3"),
    fe("059e781d65896ebe0e4ba26dc2f29907f47bcdeda4a2ca2c713d8505ea31fd5d"),
    fe("0b5b1cec63d42d5e615dc269b885a24cef303ec78c972dd17cdbb3e915cc4ffb"),
    fe("2a7c015e9c3b2c57ca8b7d26d39a1bcc85d6ffacb7d9fbd66d2a8f1d64ed0c92"),
    fe("29b736b911d71a79cf63d8a6f786f11bd5abee24161dc567a7c851eae1e43b51"),
    fe("285745a90a7fe3d09af5a808704bc69c6f1701e573912df5cc1e265d596c4141"),
    fe("2d901b8195c3c96c8c36eb99fec0134ec2b8304ae810bd30da554e3080826715"),
    fe("1905d3518355eaba7859b591ed7b8c9c253980f0450dbdf54d7a7782ba058392"),
    fe("23e813026fc0b80064d19b5c5428942fdf7efea80bfa8ec4095272bfdb7b4c9f"),
    fe("23c0a19a252c87e6b1c1c21b1a79800200c3fbff3e3300e7e5568071de9efb81"),
    fe("11c4ae607bae492413bf62cdaa2c2868ed1fec6dc0631b067ca60fab125b9e2a"),
    fe("2cd055ebb7ee4686365dea450f046ff62405fae1b1afc9fb01707cf81da0e3b9"),
    fe("053c9fef2e021fa9a20fada22fdea1505b58a3159bbb47337dbf791b215b1452"),
    fe("0a35bd74e87cbabaabe89ad1319d2c9e863b4c631c21938c9a5395bf97872a9f"),
    fe("1c115056539ce20cd5a04d1a5c43e2b00fbe83b25901be36f5ddc4666fc383fe"),
    fe("242954047e5772fd3bded590ec8beb4c542f2e264c8c3e284cdc473505c51a90"),
    fe("0e2abd315b47c0dc93849c0cdf267e811cbdbdb200a6e7c2b67edf7cb0174214"),
    fe("282b37020c0890d751c3fd76950d8068668e1dfeae621dd552d2de887da2ea75"),
    fe("28933852266b52d9ea6b5bb923d9d94f2e5a5be5c778e75e07942c234b643bd9"),
    fe("099ab6765505ba1198ef140e77b7954d4fbe79a056ce72bace39c048c00da3cf"),
    fe("2af211d8e0ac2d8fda7f849b8f229a225c6186b55762c7a7b2ae2d1dd85c57cb"),
    fe("0cd070f234014a2809ab90c71c1da61e98a96322fedd99b6aaae1ca104f3facf"),
    fe("26793e2abc8d3c30c60626fbaa158f263587d6bd15833d448b116264b930256a"),
    fe("225be36ed0ee85e1f845ada84e5748a56699152113ff61b5056b6d8bde60c19d"),
    fe("02174f49edb02d5154d2beca2dc92b9cc595383da1fde8f09e4b5ee3ea5a065e"),
    fe("0f64891c2c8b020e46c3594cb758f0bddcdbd09bd0308816fb41734a869872c3"),
    fe("192a84ca2f99d36991e2d2b1deff3989d1c156c239e10e9f56140e1854576067"),
    fe("29dfcd7b63f05abf2753a8c341d6b7a60c6243b04c9a1b8b3320bba04a4d4787"),
    fe("1ee27ad6b9b5a867733afc61a2b3e76a52ba3e4bd5e657ade91fc038819dba5b"),
    fe("0ab4773f150c3f8ad3bc9538f43cec395a7e3731ae973fefeb623a09217e64c7"),
    fe("13c352a02f595186202cb0b99fa58c5542ab67f9b6d3a0afd103deeff6d80f41"),
    fe("2a97cf2c10c4bfbfd299f67c52a169f92c05b7dac56a41c4dd4fe87c8246ce14"),
    fe("00becbb47042bd7f8c9f6bb422162d1aed089a28482f7fd16ab06a13285fe702"),
    fe("008e44da21d738691b881757ef37ed29c5bd9f7a4450fcf53290a92cc2ca2176"),
    fe("2b205a8b6d4b7063d931f3bb5d3464053843fe7fbe4b83c17883f86527882a18"),
    fe("2d9e32a7c90556fe108d255ac01e75df338fcd63b2bf84c19280d427298863fc"),
    fe("29a322a84c25bd2ddf6e2e4200228d95abd6349a02266ac1dbba520738ceca97"),
    fe("0678c9bfc6f2df012f4fe55e33bb68ac14ced1df0d02152792089d046d828c43"),
    fe("0faff3a5e7425794fe20a7e0eb615b8b1760394b7f2304286a3ae4009124db23"),
    fe("1f8f5b611af9feb9cea86c084058120553e404103aee213f5a41d1d02541c0d3"),
    fe("160875d8479602f96f40acc2d042ee52c1588b6a29de4284965a6dc6c930ea07"),
    fe("16d87a5183a316a1d70afc951efe2cd667c77328fcfda458cbf5fe3045f46d9e"),
];

/// Row-major 6x6 MDS matrix.
pub const MDS_T6: [[u8; 32]; 36] = [
    fe("124666f80561ed5916f2f070b1bd248c6d53f44d273d956a0c87b917692a4d18"),
    fe("11924f02fd19b09255aaa1cf46ea0518e3d7bfeef47421609491011db0bd0b02"),
    fe("247fa7f022304a1994ff505456c2201ef9b717369498d3ffce446601ed9df845"),
    fe("03fd7b19ef2c861f22f77ff810f54e277bc94eb76c02d79d986be3dcdf051c3f"),
    fe("18bd41239c3e71579a677443ecffbd555a81eeeea69352a68b67c8563c0c2a06"),
    fe("2d78c3a5d28de9ff35bf0a257635196e5730ca7f40493277078cd75da8b4ebdc"),
    fe("0a514a5c227f4cec95dfa029e8dd124c34895aa46bb27c0911f3780d5015540a"),
    fe("192e16d17d956b257b85a652eefdf2ee09589eac5be80915775723d2cb1da06d"),
    fe("298ce0c1e3113bb935c7058e7772b533b1aa9db0c0926bdc8917e5605ca3ac10"),
    fe("094cb4e83621afd271e41bc71727f0158ebd612239ac9d698b17fe4be05b7fc8"),
    fe("03d880395be93c27d649af5fd142e76b33918cb8841d5a28173bd5cf7d328791"),
    fe("28eeae6b5866ad68e443bbaf91680db7d7e2b3037e38fef61b42cbccffceca81"),
    fe("278bb49a7b4e44aea46eb0f882cb692801a6e60fdd5b5c23c63cd65ccce4fe0a"),
    fe("063edec1bed831f506af8db648d6fdea145345887e8bdcff109035a1d9b674d7"),
    fe("1baef1cb5509b526a42061fb53657f99b3232500e855192cbe8c940e068c475f"),
    fe("1324564ac7bdf9e22164e9858d7fa8e368b165eaea3daf4eb67ee59c0df2e5d4"),
    fe("005761b8c6aecb1a8ca4ea4dfc2c8376064a4a8004ceeda210a55240562ddc13"),
    fe("10c9e283159d58cb4cb2e35fde83a3ba1fdc28002ed9963d2a99f186178a148d"),
    fe("0c399e9f67aa40707a203feefb0b958bbdadcec5ca34901d253d026a2419f6a2"),
    fe("083f0df3f1a0351d0330ec3ff602ca8cc353b7f6e762c7107184cd7b423449f6"),
    fe("1a6764d5943fc4a720b4c0a19fdb8c711984307287a58b9b5f9f5d58212cb263"),
    fe("011a63a26feabf87fa66bde66cc25a922c96382d76c6a7ff48f1537beaed683a"),
    fe("08ca7b64657c3548f32bef5b63ad24288a41c0b251099ad27f9434307e3e64d4"),
    fe("01998270471e9361955446b0cdb8bea915ec0675f1cd648ddcb04303507a4489"),
    fe("1d6b3d5f6ea369c26f825d2362933eaa31ea35ec0a77c1fbd9e01ca1523e4432"),
    fe("119ef188bb3dd0d32306976c19941e8664be687e7a69692da27da215a6f06d40"),
    fe("2d9e0ab5c06893dfdfd03481381ba86b6e6292df5609d71f2c64b2d9a79f809e"),
    fe("25f16631bf77060f7ea34087c025bf135784319ef08cda2e31419ee0a529e658"),
    fe("144c7a11da5a7c5dabae3f33fbd03cad86d18bc594c79a497ecb9894edb554f1"),
    fe("0f971162627723f3feadacb28b0c104cb8f74de508752fa8d7c0db2af13de8ee"),
    fe("24be510095436206dd0abd0b0cbb95c883ab304aa52598b1a69306ec981a688d"),
    fe("211610e2ad4a377426fadf7068b0c1a6c299a164c1c1a603eaed944870d0b9b9"),
    fe("15a67d981041b1f6f09f3f9ebefd864e779d3af08157786ac077505e50ec79fc"),
    fe("049327fa79d28c12a2c82406947f77f06775b0287468b3136877701dbe7c9598"),
    fe("230940dcc5232658ff9c29697a3fd416d170e8c998f1aa85dea0c42d79f951aa"),
    fe("1b121c049cd1159e289007e0c9da9995cc4bab4c26fb888ec3972a8a2e656964"),
];
