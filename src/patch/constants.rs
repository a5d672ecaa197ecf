use crate::patch::apply::{SourcePatch, Splice};

/// Dependency cache directory, relative to the project root
pub const LIBDEPS_DIR: [&str; 2] = [".pio", "libdeps"];
/// Patched source file, relative to one environment directory in the cache
pub const TARGET_FILE: [&str; 3] = ["JPEGDEC", "src", "jpeg.inl"];
/// Library name used in status lines
pub const COMPONENT: &str = "JPEGDEC";

macro_rules! ac_table_marker {
    () => {
        "// CrossPoint patch: skip AC tables for progressive JPEG"
    };
}

macro_rules! mcu_skip_marker {
    () => {
        "// CrossPoint patch: guard pMCU write for MCU_SKIP"
    };
}

/// Progressive JPEGs only decode the DC scan, so `JPEGMakeHuffTables` returns
/// before building AC tables it cannot represent (11+-bit codes).
pub const AC_TABLE_PATCH: SourcePatch = SourcePatch {
    label: "AC table patch",
    description: "skip AC tables for progressive JPEG",
    marker: ac_table_marker!(),
    primary: Splice {
        anchor: concat!(
            "    }\n",
            "    // now do AC components (up to 4 tables of 16-bit codes)"
        ),
        replacement: concat!(
            "    }\n",
            "    ",
            ac_table_marker!(),
            "\n",
            "    // Progressive JPEG: only DC coefficients are decoded (first scan), so AC\n",
            "    // Huffman tables are not needed.  Skip building them to avoid failing on\n",
            "    // 11+-bit AC codes that the optimized table builder cannot handle.\n",
            "    if (pJPEG->ucMode == 0xc2)\n",
            "        return 1;\n",
            "    // now do AC components (up to 4 tables of 16-bit codes)"
        ),
    },
    secondary: None,
};

/// `JPEGDecodeMCU_P` stores into `pMCU[0]` even when the caller passes
/// `MCU_SKIP` (-8). Both stores get the `iMCU >= 0` check that
/// `JPEGDecodeMCU` already has.
pub const MCU_SKIP_PATCH: SourcePatch = SourcePatch {
    label: "MCU_SKIP patch",
    description: "guard pMCU writes for MCU_SKIP in JPEGDecodeMCU_P",
    marker: mcu_skip_marker!(),
    primary: Splice {
        anchor: concat!(
            "        pMCU[0] = (short)*iDCPredictor; // store in MCU[0]\n",
            "    }\n",
            "    // Now get the other 63 AC coefficients"
        ),
        replacement: concat!(
            "        ",
            mcu_skip_marker!(),
            "\n",
            "        if (iMCU >= 0)\n",
            "            pMCU[0] = (short)*iDCPredictor; // store in MCU[0]\n",
            "    }\n",
            "    // Now get the other 63 AC coefficients"
        ),
    },
    // Successive approximation scans. Not reached when only the first scan is
    // decoded.
    secondary: Some(Splice {
        anchor: concat!(
            "                pMCU[0] |= iPositive;\n",
            "            }\n",
            "            goto mcu_done; // that's it"
        ),
        replacement: concat!(
            "                if (iMCU >= 0)\n",
            "                    pMCU[0] |= iPositive;\n",
            "            }\n",
            "            goto mcu_done; // that's it"
        ),
    }),
};

/// Patches in the order they are applied to each target file
pub const PATCHES: &[SourcePatch] = &[AC_TABLE_PATCH, MCU_SKIP_PATCH];
