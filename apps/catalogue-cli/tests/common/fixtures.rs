//! Sample catalogue and answer-key sources.

pub const KEYS_EN: &str = "\
1.1\ta, c\tLaw 1.1
1.2)\tb\tLaw 1.2
RSZ.1\ta\tRSZ 3
";

pub const CATALOGUE_EN: &str = "\
1.1\tWhich markings are required?
a)\tHalfway line
b)\tCorner arc of 2 m
c)\tPenalty mark
1.2) Who checks the field?
a)\tThe coach
b)\tThe referee
RSZ.1\tMay a captain protest?
a)\tNo
b)\tYes
";

pub const KEYS_PL: &str = "1.1\tb\tPrzepis 1\n";

pub const CATALOGUE_PL: &str = "\
1.1\tCzy bramkarz może grać ręką?
a)\tNigdy
b)\tTak, we własnym polu karnym
";
