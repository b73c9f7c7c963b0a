// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::country_record::CountryRecord;

/// Compiled-in catalog in registration order. The first entry is the
/// default selection of a new input.
///
/// Templates describe the national significant number, i.e. without the
/// trunk prefix and without the dial code.
pub(super) static COUNTRY_DATA: &[CountryRecord] = &[
    CountryRecord::new("US", "United States", "+1", "(###) ###-####"),
    CountryRecord::new("AR", "Argentina", "+54", "## ####-####"),
    CountryRecord::new("AU", "Australia", "+61", "### ### ###"),
    CountryRecord::new("AT", "Austria", "+43", "### #######"),
    CountryRecord::new("BE", "Belgium", "+32", "### ## ## ##"),
    CountryRecord::new("BR", "Brazil", "+55", "(##) #####-####"),
    CountryRecord::new("BG", "Bulgaria", "+359", "### ### ###"),
    CountryRecord::new("CA", "Canada", "+1", "(###) ###-####"),
    CountryRecord::new("CL", "Chile", "+56", "# #### ####"),
    CountryRecord::new("CN", "China", "+86", "### #### ####"),
    CountryRecord::new("CO", "Colombia", "+57", "### ### ####"),
    CountryRecord::new("HR", "Croatia", "+385", "## ### ####"),
    CountryRecord::new("CZ", "Czech Republic", "+420", "### ### ###"),
    CountryRecord::new("DK", "Denmark", "+45", "## ## ## ##"),
    CountryRecord::new("EG", "Egypt", "+20", "### ### ####"),
    CountryRecord::new("EE", "Estonia", "+372", "#### ####"),
    CountryRecord::new("FI", "Finland", "+358", "## ### ####"),
    CountryRecord::new("FR", "France", "+33", "# ## ## ## ##"),
    CountryRecord::new("DE", "Germany", "+49", "### ########"),
    CountryRecord::new("GR", "Greece", "+30", "### ### ####"),
    CountryRecord::new("HK", "Hong Kong", "+852", "#### ####"),
    CountryRecord::new("HU", "Hungary", "+36", "## ### ####"),
    CountryRecord::new("IS", "Iceland", "+354", "### ####"),
    CountryRecord::new("IN", "India", "+91", "#####-#####"),
    CountryRecord::new("ID", "Indonesia", "+62", "###-####-####"),
    CountryRecord::new("IE", "Ireland", "+353", "## ### ####"),
    CountryRecord::new("IL", "Israel", "+972", "##-###-####"),
    CountryRecord::new("IT", "Italy", "+39", "### ### ####"),
    CountryRecord::new("JP", "Japan", "+81", "##-####-####"),
    CountryRecord::new("KZ", "Kazakhstan", "+7", "### ### ## ##"),
    CountryRecord::new("KE", "Kenya", "+254", "### ######"),
    CountryRecord::new("LV", "Latvia", "+371", "## ### ###"),
    CountryRecord::new("LT", "Lithuania", "+370", "### #####"),
    CountryRecord::new("LU", "Luxembourg", "+352", "### ### ###"),
    CountryRecord::new("MY", "Malaysia", "+60", "##-### ####"),
    CountryRecord::new("MX", "Mexico", "+52", "## #### ####"),
    CountryRecord::new("NL", "Netherlands", "+31", "# ########"),
    CountryRecord::new("NZ", "New Zealand", "+64", "## ### ####"),
    CountryRecord::new("NG", "Nigeria", "+234", "### ### ####"),
    CountryRecord::new("NO", "Norway", "+47", "### ## ###"),
    CountryRecord::new("PK", "Pakistan", "+92", "### #######"),
    CountryRecord::new("PE", "Peru", "+51", "### ### ###"),
    CountryRecord::new("PH", "Philippines", "+63", "### ### ####"),
    CountryRecord::new("PL", "Poland", "+48", "### ### ###"),
    CountryRecord::new("PT", "Portugal", "+351", "### ### ###"),
    CountryRecord::new("RO", "Romania", "+40", "### ### ###"),
    CountryRecord::new("RU", "Russia", "+7", "(###) ###-##-##"),
    CountryRecord::new("SA", "Saudi Arabia", "+966", "## ### ####"),
    CountryRecord::new("RS", "Serbia", "+381", "## #######"),
    CountryRecord::new("SG", "Singapore", "+65", "#### ####"),
    CountryRecord::new("SK", "Slovakia", "+421", "### ### ###"),
    CountryRecord::new("SI", "Slovenia", "+386", "## ### ###"),
    CountryRecord::new("ZA", "South Africa", "+27", "## ### ####"),
    CountryRecord::new("KR", "South Korea", "+82", "##-####-####"),
    CountryRecord::new("ES", "Spain", "+34", "### ## ## ##"),
    CountryRecord::new("SE", "Sweden", "+46", "##-### ## ##"),
    CountryRecord::new("CH", "Switzerland", "+41", "## ### ## ##"),
    CountryRecord::new("TW", "Taiwan", "+886", "### ### ###"),
    CountryRecord::new("TH", "Thailand", "+66", "## ### ####"),
    CountryRecord::new("TR", "Turkey", "+90", "(###) ### ## ##"),
    CountryRecord::new("UA", "Ukraine", "+380", "## ### ## ##"),
    CountryRecord::new("AE", "United Arab Emirates", "+971", "## ### ####"),
    CountryRecord::new("GB", "United Kingdom", "+44", "#### ######"),
    CountryRecord::new("VN", "Vietnam", "+84", "## #### ####"),
];
