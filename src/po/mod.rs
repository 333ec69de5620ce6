// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PO file reader module.

pub mod encoding;
pub mod entry;
pub mod escape;
pub mod parser;
pub mod quotes;
