//! Shared sample data for the unit tests.
//!
//! 24 source rows, 15 countries kept. The 1988 and 2024 rows fall outside
//! the working range. Brazil and the Netherlands tie on Total_Medals (19)
//! for tenth place; Chad has a row with no medals.

use crate::WorkingTable;

pub(crate) const SAMPLE_CSV: &str = "\
Year,Host_country,Host_city,Country_Name,Country_Code,Gold,Silver,Bronze
1988,South Korea,Seoul,United States,USA,36,31,27
1992,Spain,Barcelona,United States,USA,37,34,37
1992,Spain,Barcelona,China,CHN,16,22,16
1992,Spain,Barcelona,Germany,GER,33,21,28
2012,Great Britain,London,United States,USA,46,29,29
2012,Great Britain,London,China,CHN,38,27,23
2012,Great Britain,London,Great Britain,GBR,29,17,19
2012,Great Britain,London,Germany,GER,11,19,14
2012,Great Britain,London,Kenya,KEN,2,4,5
2016,Brazil,Rio de Janeiro,United States,USA,46,37,38
2016,Brazil,Rio de Janeiro,Great Britain,GBR,27,23,17
2016,Brazil,Rio de Janeiro,China,CHN,26,18,26
2016,Brazil,Rio de Janeiro,Kenya,KEN,6,6,1
2016,Brazil,Rio de Janeiro,Brazil,BRA,7,6,6
2016,Brazil,Rio de Janeiro,Japan,JPN,12,8,21
2016,Brazil,Rio de Janeiro,France,FRA,10,18,14
2016,Brazil,Rio de Janeiro,Italy,ITA,8,12,8
2016,Brazil,Rio de Janeiro,Australia,AUS,8,11,10
2016,Brazil,Rio de Janeiro,Netherlands,NED,8,7,4
2016,Brazil,Rio de Janeiro,Hungary,HUN,8,3,4
2016,Brazil,Rio de Janeiro,Jamaica,JAM,6,3,2
2016,Brazil,Rio de Janeiro,Fiji,FIJ,1,0,0
2016,Brazil,Rio de Janeiro,Chad,CHA,0,0,0
2024,France,Paris,France,FRA,16,26,22
";

pub(crate) fn sample_table() -> WorkingTable {
    WorkingTable::from_csv(SAMPLE_CSV).unwrap()
}
