// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use seqpair::errors::SeqPairError;

fn main() -> Result<(), SeqPairError> {
    seqpair::run()
}
