//! Trimmed-down `jpeg.inl` excerpts shared by tests.

/// `JPEGMakeHuffTables` as shipped in JPEGDEC 1.8.x
pub const HUFF_TABLES: &str = concat!(
    "static int JPEGMakeHuffTables(JPEGIMAGE *pJPEG, int bThumbnail)\n",
    "{\n",
    "    int code, repeat, count, codestart;\n",
    "    for (iTable = 0; iTable < 4; iTable++)\n",
    "    {\n",
    "        pJPEG->ucHuffTableUsed[iTable] = 1;\n",
    "    }\n",
    "    // now do AC components (up to 4 tables of 16-bit codes)\n",
    "    for (iTable = 0; iTable < 4; iTable++)\n",
    "    {\n",
    "        p = &pJPEG->ucHuffVals[iTable * HUFF_TABLEN];\n",
    "    }\n",
    "    return 1;\n",
    "}\n"
);

/// `JPEGDecodeMCU_P` with both the successive approximation and DC stores
pub const DECODE_MCU_P: &str = concat!(
    "static int JPEGDecodeMCU_P(JPEGIMAGE *pJPEG, int iMCU, int *iDCPredictor)\n",
    "{\n",
    "    signed short *pMCU = &pJPEG->sMCUs[iMCU & 0xffffff];\n",
    "    if (pJPEG->cApproxBitsHigh)\n",
    "    {\n",
    "        if (pJPEG->iScanStart == 0)\n",
    "        {\n",
    "            if (ulBits & ulBitMask)\n",
    "            {\n",
    "                pMCU[0] |= iPositive;\n",
    "            }\n",
    "            goto mcu_done; // that's it\n",
    "        }\n",
    "    }\n",
    "    if (pJPEG->iScanStart == 0)\n",
    "    {\n",
    "        *iDCPredictor = *iDCPredictor + (iCoeff << pJPEG->cApproxBitsLow);\n",
    "        pMCU[0] = (short)*iDCPredictor; // store in MCU[0]\n",
    "    }\n",
    "    // Now get the other 63 AC coefficients\n",
    "mcu_done:\n",
    "    return 0;\n",
    "}\n"
);

/// `JPEGDecodeMCU_P` from a build without the successive approximation store
pub const DECODE_MCU_P_DC_ONLY: &str = concat!(
    "static int JPEGDecodeMCU_P(JPEGIMAGE *pJPEG, int iMCU, int *iDCPredictor)\n",
    "{\n",
    "    signed short *pMCU = &pJPEG->sMCUs[iMCU & 0xffffff];\n",
    "    if (pJPEG->iScanStart == 0)\n",
    "    {\n",
    "        *iDCPredictor = *iDCPredictor + iCoeff;\n",
    "        pMCU[0] = (short)*iDCPredictor; // store in MCU[0]\n",
    "    }\n",
    "    // Now get the other 63 AC coefficients\n",
    "    return 0;\n",
    "}\n"
);

/// Both functions, as they appear together in one `jpeg.inl`
pub fn jpeg_inl() -> String {
    format!("#include \"JPEGDEC.h\"\n\n{}\n{}", HUFF_TABLES, DECODE_MCU_P)
}
